use crate::props::value::PropValue;
use std::fmt;
use std::sync::Arc;

/// Failure raised by a handler callback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct HandlerError {
	pub message: String,
}

impl HandlerError {
	pub fn new(message: impl Into<String>) -> Self {
		HandlerError {
			message: message.into(),
		}
	}

	/// Join two failures into one, messages separated by a single space.
	pub fn combine(first: HandlerError, second: HandlerError) -> Self {
		HandlerError {
			message: format!("{} {}", first.message, second.message),
		}
	}
}

type Callback = dyn Fn(&[PropValue]) -> Result<(), HandlerError> + Send + Sync;

/// A shared callback prop such as `onClick`.
///
/// Cloning is cheap and clones compare equal; two separately built handlers
/// never do.
#[derive(Clone)]
pub struct Handler(Arc<Callback>);

impl Handler {
	pub fn new<F>(callback: F) -> Self
	where
		F: Fn(&[PropValue]) -> Result<(), HandlerError> + Send + Sync + 'static,
	{
		Handler(Arc::new(callback))
	}

	/// A handler that does nothing and never fails.
	pub fn noop() -> Self {
		Handler::new(|_| Ok(()))
	}

	pub fn call(&self, args: &[PropValue]) -> Result<(), HandlerError> {
		(self.0)(args)
	}

	/// Build a handler that runs `overriding` then `base` with the same
	/// arguments.
	///
	/// Both always run. A single failure is returned unchanged; two failures
	/// are joined into one, base message first.
	pub fn chain(base: Handler, overriding: Handler) -> Handler {
		Handler::new(move |args| {
			let override_result = overriding.call(args);
			let base_result = base.call(args);
			HandlerFailures::collect(base_result, override_result).into_result()
		})
	}
}

impl fmt::Debug for Handler {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Handler({:p})", Arc::as_ptr(&self.0))
	}
}

impl PartialEq for Handler {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

/// Failures captured from one invocation of a chained handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerFailures {
	None,
	One(HandlerError),
	Both {
		base: HandlerError,
		overriding: HandlerError,
	},
}

impl HandlerFailures {
	pub fn collect(
		base: Result<(), HandlerError>,
		overriding: Result<(), HandlerError>,
	) -> Self {
		match (base, overriding) {
			(Ok(()), Ok(())) => HandlerFailures::None,
			(Err(e), Ok(())) | (Ok(()), Err(e)) => HandlerFailures::One(e),
			(Err(base), Err(overriding)) => HandlerFailures::Both { base, overriding },
		}
	}

	pub fn into_result(self) -> Result<(), HandlerError> {
		match self {
			HandlerFailures::None => Ok(()),
			HandlerFailures::One(e) => {
				tracing::debug!(error = %e, "chained handler failed");
				Err(e)
			}
			HandlerFailures::Both { base, overriding } => {
				tracing::debug!(base = %base, overriding = %overriding, "both chained handlers failed");
				Err(HandlerError::combine(base, overriding))
			}
		}
	}
}
