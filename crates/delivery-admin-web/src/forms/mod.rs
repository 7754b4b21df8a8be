//! Entity forms and their shared submit pipeline
//!
//! A submit goes through three gates in order: required-field validation,
//! the in-flight guard, then payload assembly. Only after all three does the
//! caller's request run, so an empty required field or a second click can
//! never reach the network.

pub mod ad;
pub mod admin;
pub mod deliverer;
pub mod notification;
pub mod promotion;
pub mod restaurant;
pub mod settings;

use delivery_admin_core::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use validator::{Validate, ValidationError};

/// Field state of a create or update form
pub trait EntityForm: Validate {
    /// Request body built from the fields
    type Payload: Serialize;

    /// Client-side checks; nothing is sent when this fails
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] for an empty required field and
    /// [`Error::Validation`] for any other rejected value.
    fn check(&self) -> Result<()> {
        self.validate().map_err(Error::from)
    }

    /// Assemble the request body
    ///
    /// # Errors
    ///
    /// Returns an error if a field cannot be converted.
    fn payload(&self) -> Result<Self::Payload>;
}

type Observer = Arc<dyn Fn(bool) + Send + Sync>;

/// In-flight flag shared by every submit of one form
#[derive(Clone, Default)]
pub struct SubmitGuard {
    in_flight: Arc<AtomicBool>,
    observer: Option<Observer>,
}

impl fmt::Debug for SubmitGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmitGuard")
            .field("in_flight", &self.is_busy())
            .finish_non_exhaustive()
    }
}

impl SubmitGuard {
    /// Guard that reports every busy/idle transition, e.g. to disable inputs
    pub fn observed(observer: impl Fn(bool) + Send + Sync + 'static) -> Self {
        Self {
            in_flight: Arc::default(),
            observer: Some(Arc::new(observer)),
        }
    }

    /// A submit is in flight
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Claim the guard; `None` if another submit holds it
    #[must_use]
    pub fn try_begin(&self) -> Option<SubmitTicket> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        self.notify(true);
        Some(SubmitTicket {
            guard: self.clone(),
        })
    }

    fn notify(&self, busy: bool) {
        if let Some(observer) = &self.observer {
            observer(busy);
        }
    }
}

/// Held for the duration of one submit; releases the guard when dropped
#[derive(Debug)]
pub struct SubmitTicket {
    guard: SubmitGuard,
}

impl Drop for SubmitTicket {
    fn drop(&mut self) {
        self.guard.in_flight.store(false, Ordering::Release);
        self.guard.notify(false);
    }
}

/// Validate `form`, claim `guard` and run `send` with the assembled payload
///
/// # Errors
///
/// Returns the validation error, [`Error::AlreadySubmitting`] when another
/// submit is in flight, or whatever `send` returns.
pub async fn submit<F, S, Fut, T>(guard: &SubmitGuard, form: &F, send: S) -> Result<T>
where
    F: EntityForm,
    S: FnOnce(F::Payload) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    form.check()?;
    let _ticket = guard.try_begin().ok_or(Error::AlreadySubmitting)?;
    let payload = form.payload()?;
    send(payload).await
}

/// Required-field rule: rejects values that are empty once trimmed.
///
/// The `required` code makes the failure a [`Error::MissingField`] labelled
/// with the rule's `message`.
///
/// # Errors
///
/// Returns a `required` validation error for a blank value.
pub fn non_blank(value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// `Some(text)` unless the field is blank
pub(crate) fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;

    #[derive(Debug, Clone, Validate)]
    struct NoteForm {
        #[validate(custom(function = "non_blank", message = "Título"))]
        title: String,
        body: String,
    }

    impl EntityForm for NoteForm {
        type Payload = (String, String);

        fn payload(&self) -> Result<Self::Payload> {
            Ok((self.title.clone(), self.body.clone()))
        }
    }

    fn note(title: &str) -> NoteForm {
        NoteForm {
            title: title.to_string(),
            body: "corpo".to_string(),
        }
    }

    #[test]
    fn test_empty_required_field_never_sends() {
        let guard = SubmitGuard::default();
        let calls = AtomicUsize::new(0);

        for title in ["", "   ", "\t\n"] {
            let result = block_on(submit(&guard, &note(title), |_| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }));

            assert_eq!(
                result,
                Err(Error::MissingField {
                    field: "Título".to_string()
                })
            );
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(!guard.is_busy());
    }

    #[test]
    fn test_non_blank() {
        assert!(non_blank("Pizzaria").is_ok());
        assert!(non_blank("  x  ").is_ok());
        assert_eq!(
            non_blank(" \t ").map_err(|e| e.code.to_string()),
            Err("required".to_string())
        );
    }

    #[test]
    fn test_second_submit_while_in_flight_is_rejected() {
        let guard = SubmitGuard::default();
        let calls = AtomicUsize::new(0);
        let calls = &calls;
        let (release, released) = oneshot::channel::<()>();
        let form = note("Aviso");

        let first = submit(&guard, &form, move |_| async move {
            calls.fetch_add(1, Ordering::SeqCst);
            released.await.ok();
            Ok(())
        });
        let second = async {
            let result = submit(&guard, &form, |_| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .await;
            release.send(()).ok();
            result
        };

        let (first, second) = block_on(async { futures::join!(first, second) });

        assert_eq!(first, Ok(()));
        assert_eq!(second, Err(Error::AlreadySubmitting));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!guard.is_busy());
    }

    #[test]
    fn test_guard_is_released_after_failure() {
        let guard = SubmitGuard::default();
        let result: Result<()> = block_on(submit(&guard, &note("x"), |_| async {
            Err(Error::transport("/notes", "offline"))
        }));

        assert!(result.is_err());
        assert!(guard.try_begin().is_some());
    }

    #[test]
    fn test_observer_sees_busy_then_idle() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        let guard = SubmitGuard::observed(move |busy| log.lock().unwrap().push(busy));

        let ticket = guard.try_begin().unwrap();
        assert!(guard.try_begin().is_none());
        drop(ticket);

        assert_eq!(*seen.lock().unwrap(), vec![true, false]);
    }

    #[test]
    fn test_optional_trims_blank_values() {
        assert_eq!(optional("  "), None);
        assert_eq!(optional(" @cantina "), Some("@cantina".to_string()));
    }
}
