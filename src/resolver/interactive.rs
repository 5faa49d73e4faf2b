//! Interactive Resolver.
//!
//! Fills the fields of a [`RequestDraft`] that are still marked [`Field::Prompt`] by asking
//! the user, one question at a time. The flow is an explicit state machine; each state
//! resolves one field and names the state that follows:
//!
//! ```text
//! SelectArtifactType ─► AskName ─┬─ view ──────────► AskController ─► AskRootView ─► AskRoute ─► SelectNamespaces ─► Done
//!                                ├─ controller/control ─────────────────────────────────────────► SelectModules ────► Done
//!                                ├─ bootstrap ──────────────────────────────────────────────────► AskTheme ─────────► Done
//!                                └─ component ──────────────────────────────────────────────────────────────────────► Done
//! ```
//!
//! A state whose field was supplied on the command line asks nothing. `AskRootView` is only
//! asked when the project has no root view yet, and a view that becomes the root view gets
//! no route question.

use anyhow::Result;
use tracing::debug;

use super::{Field, RequestDraft, ResourceIndex};
use crate::core::{ArtifactType, CreateError};
use crate::project::Project;
use crate::prompt::{Prompter, Question};

/// Label of the theme choice that selects no theme.
pub const NO_THEME_CHOICE: &str = "none";

/// The field currently being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverState {
    SelectArtifactType,
    AskName,
    AskController,
    AskRootView,
    AskRoute,
    SelectNamespaces,
    SelectModules,
    AskTheme,
    Done,
}

/// Asks for the missing fields of a draft.
pub struct InteractiveResolver<'a, P> {
    prompter: &'a P,
    index: &'a ResourceIndex,
    project: &'a Project,
}

impl<'a, P: Prompter> InteractiveResolver<'a, P> {
    /// Create a resolver asking through `prompter`, offering choices from `index`.
    pub const fn new(prompter: &'a P, index: &'a ResourceIndex, project: &'a Project) -> Self {
        Self {
            prompter,
            index,
            project,
        }
    }

    /// Run the question flow until every relevant field is resolved.
    ///
    /// A cancelled question aborts the whole flow; no partial draft is returned.
    pub async fn resolve(&self, mut draft: RequestDraft) -> Result<RequestDraft> {
        let mut state = ResolverState::SelectArtifactType;

        while state != ResolverState::Done {
            let next = self.step(state, &mut draft).await?;
            debug!("Interactive state {:?} -> {:?}", state, next);
            state = next;
        }

        Ok(draft)
    }

    async fn step(&self, state: ResolverState, draft: &mut RequestDraft) -> Result<ResolverState> {
        match state {
            ResolverState::SelectArtifactType => {
                if draft.artifact_type.needs_prompt() {
                    let choices = ArtifactType::ALL.iter().map(|t| t.label().to_string()).collect();
                    let question =
                        Question::select("type", "What do you want to add to your project?", choices);
                    let label = self.prompter.run(&question).await?.into_text()?;
                    draft.artifact_type = Field::Supplied(label.parse()?);
                }
                Ok(ResolverState::AskName)
            }

            ResolverState::AskName => {
                let artifact_type = current_type(draft)?;
                if draft.name.needs_prompt() {
                    let required = artifact_type.requires_name();
                    let question = Question::input(
                        "name",
                        format!("How should the new {} be named?", artifact_type.label()),
                        required,
                    );
                    let name = self.prompter.run(&question).await?.into_text()?;
                    let name = name.trim();
                    draft.name = if name.is_empty() {
                        if required {
                            return Err(CreateError::MissingName.into());
                        }
                        Field::Unset
                    } else {
                        Field::Supplied(name.to_string())
                    };
                }
                Ok(match artifact_type {
                    ArtifactType::View => ResolverState::AskController,
                    ArtifactType::Controller | ArtifactType::Control => ResolverState::SelectModules,
                    ArtifactType::Bootstrap => ResolverState::AskTheme,
                    ArtifactType::Component => ResolverState::Done,
                })
            }

            ResolverState::AskController => {
                if draft.controller.needs_prompt() {
                    let question = Question::confirm(
                        "controller",
                        "Do you want to create a corresponding controller?",
                        false,
                    );
                    draft.controller = Field::Supplied(self.prompter.run(&question).await?.into_bool()?);
                }
                Ok(ResolverState::AskRootView)
            }

            ResolverState::AskRootView => {
                if draft.root_view.needs_prompt() && !self.project.has_entry_point() {
                    let question = Question::confirm(
                        "rootView",
                        "Do you want to use the view as root view of the application?",
                        false,
                    );
                    draft.root_view = Field::Supplied(self.prompter.run(&question).await?.into_bool()?);
                }
                if draft.root_view.value() == Some(&true) {
                    Ok(ResolverState::SelectNamespaces)
                } else {
                    Ok(ResolverState::AskRoute)
                }
            }

            ResolverState::AskRoute => {
                if draft.route.needs_prompt() {
                    let question = Question::confirm(
                        "route",
                        "Do you want to add a route for the view?",
                        false,
                    );
                    draft.route = Field::Supplied(self.prompter.run(&question).await?.into_bool()?);
                }
                Ok(ResolverState::SelectNamespaces)
            }

            ResolverState::SelectNamespaces => {
                if draft.namespaces.needs_prompt() {
                    draft.namespaces = Field::Supplied(
                        self.select_components("namespaces", "Which libraries should the view use?")
                            .await?,
                    );
                }
                Ok(ResolverState::Done)
            }

            ResolverState::SelectModules => {
                if draft.modules.needs_prompt() {
                    draft.modules = Field::Supplied(
                        self.select_components("modules", "Which modules should be required?")
                            .await?,
                    );
                }
                Ok(ResolverState::Done)
            }

            ResolverState::AskTheme => {
                if draft.theme.needs_prompt() {
                    draft.theme = self.select_theme().await?;
                }
                Ok(ResolverState::Done)
            }

            ResolverState::Done => Ok(ResolverState::Done),
        }
    }

    async fn select_components(&self, name: &str, message: &str) -> Result<Vec<String>> {
        let components = self.index.list_components().await?;
        if components.is_empty() {
            debug!("No components installed, skipping '{}'", name);
            return Ok(Vec::new());
        }

        let choices = components.iter().map(|c| c.name.clone()).collect();
        let question = Question::multi_select(name, message, choices);
        Ok(self.prompter.run(&question).await?.into_choices()?)
    }

    async fn select_theme(&self) -> Result<Field<String>> {
        let themes = self.index.list_theme_libraries().await?;
        if themes.is_empty() {
            debug!("No theme libraries installed, skipping theme selection");
            return Ok(Field::Unset);
        }

        let mut choices: Vec<String> = themes.iter().map(|t| t.name.clone()).collect();
        choices.push(NO_THEME_CHOICE.to_string());
        let question = Question::select("theme", "Which theme should the bootstrap use?", choices);

        let theme = self.prompter.run(&question).await?.into_text()?;
        Ok(if theme == NO_THEME_CHOICE { Field::Unset } else { Field::Supplied(theme) })
    }
}

fn current_type(draft: &RequestDraft) -> Result<ArtifactType, CreateError> {
    draft.artifact_type.value().copied().ok_or(CreateError::MissingComponent)
}
