/// Everything that can go wrong while talking to Mailchimp.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A request was attempted with no API key set.
    #[error("Please provide an API key.")]
    MissingCredential,
    /// The API key lacks the `-datacenter` segment.
    #[error("There seems to be an issue with your apikey. Please consult Mailchimp")]
    InvalidCredential,
    /// A verb shorthand was called without a resource path.
    #[error("Request methods require a resource URI")]
    InvalidArgument,
    /// The verb is not one of get, head, put, post, patch or delete.
    #[error("Method \"{0}\" is not supported.")]
    UnsupportedMethod(String),
    /// A transport failure or a non-success status. The message is the raw
    /// response body when one was available, otherwise the transport's own
    /// message.
    #[error("{0}")]
    RequestFailed(String),
}
