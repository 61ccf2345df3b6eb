//! Option sources and load state.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use thiserror::Error;

use crate::option::SelectOption;

/// Error type for option loading failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The loader itself failed.
    #[error("option loader failed: {0}")]
    Failed(String),
    /// An async loader was configured but no tokio runtime is running.
    #[error("no async runtime available to run the option loader")]
    NoRuntime,
}

impl LoadError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

impl From<String> for LoadError {
    fn from(message: String) -> Self {
        Self::Failed(message)
    }
}

impl From<&str> for LoadError {
    fn from(message: &str) -> Self {
        Self::Failed(message.to_string())
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Failed(err.to_string())
    }
}

/// Async option loader. Receives the current query, if any.
pub type Loader =
    Arc<dyn Fn(Option<String>) -> BoxFuture<'static, Result<Vec<SelectOption>, LoadError>> + Send + Sync>;

/// Where candidate options come from.
#[derive(Clone)]
pub enum OptionSource {
    Static(Vec<SelectOption>),
    Async(Loader),
}

impl OptionSource {
    /// Wrap an async function as an option source.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let source = OptionSource::loader(|query| async move {
    ///     fetch_countries(query.as_deref()).await
    /// });
    /// ```
    pub fn loader<F, Fut>(f: F) -> Self
    where
        F: Fn(Option<String>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Vec<SelectOption>, LoadError>> + Send + 'static,
    {
        Self::Async(Arc::new(move |query| f(query).boxed()))
    }

    pub fn is_async(&self) -> bool {
        matches!(self, Self::Async(_))
    }
}

impl Default for OptionSource {
    fn default() -> Self {
        Self::Static(Vec::new())
    }
}

impl From<Vec<SelectOption>> for OptionSource {
    fn from(options: Vec<SelectOption>) -> Self {
        Self::Static(options)
    }
}

impl fmt::Debug for OptionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(options) => f.debug_tuple("Static").field(&options.len()).finish(),
            Self::Async(_) => f.write_str("Async(..)"),
        }
    }
}

/// State of the most recent option load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing has been requested yet
    #[default]
    Idle,
    /// A load is in flight
    Loading,
    /// The latest load resolved
    Ready,
    /// The latest load failed
    Error(LoadError),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// True once the current load request has resolved successfully.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn as_error(&self) -> Option<&LoadError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}
