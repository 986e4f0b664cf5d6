//! Error types for pushmi
//!
//! Every failure in reference resolution, credential lookup, tag listing or
//! a per-tag runtime operation is reported as a [`PushmiError`]. None of them
//! are retried; callers are expected to surface the message and stop.

use thiserror::Error;


type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for pushmi operations
#[derive(Error, Debug)]
pub enum PushmiError {
    /// The reference string did not split into 1, 2 or 3 `/`-separated segments
    #[error("Invalid image reference '{reference}': expected [registry/][organization/]repository")]
    InvalidReferenceFormat { reference: String },

    /// No adapter is known for the registry hostname
    #[error("Unsupported registry: {registry}")]
    UnsupportedRegistry { registry: String },

    /// The Docker credential config is missing, unreadable or not valid JSON
    #[error("Failed to read Docker config {path}: {message}")]
    ConfigRead {
        message: String,
        path: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// A registry entry in the Docker credential config could not be decoded
    #[error("Invalid credentials for {registry} in {path}: {message}")]
    ConfigParse {
        message: String,
        registry: String,
        path: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// The tag-listing endpoint answered with something other than 200
    #[error("Registry request to {url} failed (status: {status})")]
    RegistryRequestFailed { status: u16, url: String },

    /// The tag-listing endpoint answered 200 with a body of the wrong shape
    #[error("Unexpected response from {url}: {message}")]
    UnexpectedResponse {
        message: String,
        url: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// Transport-level failures (DNS, connection refused, TLS)
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// The container runtime failed a pull, tag or push
    #[error("{operation} of {image} failed: {message}")]
    Runtime {
        operation: String,
        image: String,
        message: String,
    },

    /// Status or tag output could not be written
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// The pushmi settings file could not be loaded
    #[error("Settings error: {message}")]
    Settings {
        message: String,
        path: Option<String>,
        #[source]
        source: Option<BoxedSource>,
    },
}

/// Result type alias for pushmi operations
pub type Result<T> = std::result::Result<T, PushmiError>;

impl PushmiError {
    /// Creates a new invalid reference error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libpushmi::error::PushmiError;
    ///
    /// let err = PushmiError::invalid_reference("a/b/c/d");
    /// assert!(matches!(err, PushmiError::InvalidReferenceFormat { .. }));
    /// ```
    pub fn invalid_reference<S: Into<String>>(reference: S) -> Self {
        Self::InvalidReferenceFormat {
            reference: reference.into(),
        }
    }

    /// Creates a new unsupported registry error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libpushmi::error::PushmiError;
    ///
    /// let err = PushmiError::unsupported_registry("ghcr.io");
    /// assert_eq!(err.to_string(), "Unsupported registry: ghcr.io");
    /// ```
    pub fn unsupported_registry<S: Into<String>>(registry: S) -> Self {
        Self::UnsupportedRegistry {
            registry: registry.into(),
        }
    }

    /// Creates a new config read error with a source error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libpushmi::error::PushmiError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    /// let err = PushmiError::config_read("file not found", "/root/.docker/config.json", io_err);
    /// assert!(matches!(err, PushmiError::ConfigRead { .. }));
    /// ```
    pub fn config_read<S, P, E>(message: S, path: P, source: E) -> Self
    where
        S: Into<String>,
        P: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigRead {
            message: message.into(),
            path: path.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new config parse error.
    pub fn config_parse<S, R, P>(message: S, registry: R, path: P) -> Self
    where
        S: Into<String>,
        R: Into<String>,
        P: Into<String>,
    {
        Self::ConfigParse {
            message: message.into(),
            registry: registry.into(),
            path: path.into(),
            source: None,
        }
    }

    /// Creates a new config parse error with a source error.
    pub fn config_parse_with_source<S, R, P, E>(message: S, registry: R, path: P, source: E) -> Self
    where
        S: Into<String>,
        R: Into<String>,
        P: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigParse {
            message: message.into(),
            registry: registry.into(),
            path: path.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new registry request error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libpushmi::error::PushmiError;
    ///
    /// let err = PushmiError::request_failed(404, "https://gcr.io/v2/org/repo/tags/list");
    /// assert!(matches!(err, PushmiError::RegistryRequestFailed { status: 404, .. }));
    /// ```
    pub fn request_failed<U: Into<String>>(status: u16, url: U) -> Self {
        Self::RegistryRequestFailed {
            status,
            url: url.into(),
        }
    }

    /// Creates a new unexpected response error.
    pub fn unexpected_response<S: Into<String>, U: Into<String>>(message: S, url: U) -> Self {
        Self::UnexpectedResponse {
            message: message.into(),
            url: url.into(),
            source: None,
        }
    }

    /// Creates a new unexpected response error with a source error.
    pub fn unexpected_response_with_source<S, U, E>(message: S, url: U, source: E) -> Self
    where
        S: Into<String>,
        U: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::UnexpectedResponse {
            message: message.into(),
            url: url.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new network error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libpushmi::error::PushmiError;
    ///
    /// let err = PushmiError::network("connection refused");
    /// assert!(matches!(err, PushmiError::Network { .. }));
    /// ```
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new network error with a source error.
    pub fn network_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new container runtime error.
    ///
    /// # Examples
    ///
    /// ```
    /// use libpushmi::error::PushmiError;
    ///
    /// let err = PushmiError::runtime("pull", "mongo:4.0", "manifest unknown");
    /// assert_eq!(err.to_string(), "pull of mongo:4.0 failed: manifest unknown");
    /// ```
    pub fn runtime<O, I, S>(operation: O, image: I, message: S) -> Self
    where
        O: Into<String>,
        I: Into<String>,
        S: Into<String>,
    {
        Self::Runtime {
            operation: operation.into(),
            image: image.into(),
            message: message.into(),
        }
    }

    /// Creates a new settings error with a source error.
    pub fn settings_with_source<S, E>(message: S, path: Option<String>, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Settings {
            message: message.into(),
            path,
            source: Some(Box::new(source)),
        }
    }
}
