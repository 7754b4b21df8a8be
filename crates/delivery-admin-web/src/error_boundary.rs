//! Last-resort recovery panel for errors raised while rendering
//!
//! Screens handle request failures themselves. Anything that still escapes
//! into the view tree, such as a row that cannot be projected, lands here
//! and replaces the affected subtree until the operator acts.

use leptos::prelude::*;

/// Health of the guarded subtree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Fault {
    /// Rendering normally
    #[default]
    Healthy,
    /// Rendering failed with these messages
    Faulted(Vec<String>),
}

/// What [`ConsoleErrorBoundary`] renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mount {
    /// The guarded subtree, built for this epoch
    Subtree(u64),
    /// The recovery panel; the subtree is dropped
    Fallback,
}

/// State machine behind [`ConsoleErrorBoundary`]
///
/// The epoch changes on every retry; the subtree is rebuilt whenever it
/// changes. Once faulted, only [`FaultBoundary::retry`] brings the subtree
/// back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaultBoundary {
    fault: Fault,
    epoch: u64,
}

impl FaultBoundary {
    /// Record errors raised by the subtree; an empty list changes nothing
    pub fn capture(&mut self, messages: Vec<String>) {
        if messages.is_empty() {
            return;
        }
        tracing::error!("Render fault: {}", messages.join("; "));
        self.fault = Fault::Faulted(messages);
    }

    /// Clear the fault and schedule a fresh mount of the subtree
    pub fn retry(&mut self) {
        self.fault = Fault::Healthy;
        self.epoch = self.epoch.wrapping_add(1);
    }

    /// Whether the subtree is currently replaced by the fallback
    #[must_use]
    pub const fn is_faulted(&self) -> bool {
        matches!(self.fault, Fault::Faulted(_))
    }

    /// Captured messages; empty while healthy
    #[must_use]
    pub fn messages(&self) -> &[String] {
        match &self.fault {
            Fault::Healthy => &[],
            Fault::Faulted(messages) => messages,
        }
    }

    /// Mount generation of the subtree
    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// What to render right now
    #[must_use]
    pub const fn mount(&self) -> Mount {
        if self.is_faulted() {
            Mount::Fallback
        } else {
            Mount::Subtree(self.epoch)
        }
    }
}

#[component]
fn FaultPanel(
    messages: Vec<String>,
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="fault-panel">
            <h2>"Algo deu errado"</h2>
            <p>"Ocorreu um erro inesperado ao exibir esta tela."</p>
            <ul class="fault-messages">
                {messages
                    .into_iter()
                    .map(|message| view! { <li>{message}</li> })
                    .collect_view()}
            </ul>
            <div class="fault-actions">
                <button class="btn btn-primary" on:click=move |_| on_retry.run(())>
                    "Tentar novamente"
                </button>
                <button
                    class="btn btn-secondary"
                    on:click=|_| {
                        if let Err(e) = window().location().reload() {
                            tracing::error!("Reload failed: {e:?}");
                        }
                    }
                >
                    "Recarregar página"
                </button>
            </div>
        </div>
    }
}

/// Error boundary around the console content
///
/// Leptos' own boundary flips back to its children as soon as their errors
/// clear. This one drops the children on the first fault and keeps the
/// recovery panel until the operator retries or reloads.
#[component]
pub fn ConsoleErrorBoundary(
    /// Guarded subtree
    children: ChildrenFn,
) -> impl IntoView {
    let boundary = RwSignal::new(FaultBoundary::default());
    let on_retry = Callback::new(move |()| boundary.update(FaultBoundary::retry));
    let mount = Memo::new(move |_| boundary.with(FaultBoundary::mount));

    move || match mount.get() {
        Mount::Fallback => view! {
            <FaultPanel
                messages=boundary.with_untracked(|b| b.messages().to_vec())
                on_retry=on_retry
            />
        }
        .into_any(),
        Mount::Subtree(epoch) => {
            tracing::debug!("Mounting console content, epoch {epoch}");
            let children = children.clone();

            view! {
                <ErrorBoundary fallback=move |errors| {
                    let messages: Vec<String> = errors
                        .get_untracked()
                        .into_iter()
                        .map(|(_, error)| error.to_string())
                        .collect();
                    let shown = messages.clone();
                    // Replacing the subtree from inside its own render pass is deferred
                    queue_microtask(move || boundary.update(|b| b.capture(messages)));
                    view! { <FaultPanel messages=shown on_retry=on_retry /> }
                }>{children()}</ErrorBoundary>
            }
            .into_any()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_capture_then_retry() {
        let mut boundary = FaultBoundary::default();
        assert!(!boundary.is_faulted());

        boundary.capture(vec!["Rendering failed: row 3".to_string()]);
        assert!(boundary.is_faulted());
        assert_eq!(boundary.messages(), ["Rendering failed: row 3".to_string()]);
        assert_eq!(boundary.epoch(), 0);

        boundary.retry();
        assert!(!boundary.is_faulted());
        assert!(boundary.messages().is_empty());
        assert_eq!(boundary.epoch(), 1);
    }

    #[test]
    fn test_fault_is_sticky_until_retry() {
        let mut boundary = FaultBoundary::default();
        boundary.capture(vec!["first".to_string()]);
        boundary.capture(Vec::new());

        assert!(boundary.is_faulted());
        assert_eq!(boundary.epoch(), 0);
    }

    #[test]
    fn test_fallback_stays_until_retry() {
        let mut boundary = FaultBoundary::default();
        assert_eq!(boundary.mount(), Mount::Subtree(0));

        boundary.capture(vec!["Rendering failed: row 3".to_string()]);
        assert_eq!(boundary.mount(), Mount::Fallback);

        // A later render pass of the subtree reporting no errors changes nothing
        boundary.capture(Vec::new());
        assert_eq!(boundary.mount(), Mount::Fallback);

        boundary.retry();
        assert_eq!(boundary.mount(), Mount::Subtree(1));
    }

    #[test]
    fn test_every_retry_remounts() {
        let mut boundary = FaultBoundary::default();
        boundary.retry();
        boundary.retry();
        assert_eq!(boundary.epoch(), 2);
    }
}
