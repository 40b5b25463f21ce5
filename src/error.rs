use thiserror::Error;

/// Failures talking to the contest archive. None of them are retried.
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("archive returned {status} for {url}: {excerpt}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        excerpt: String,
    },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("archive rejected {url}: {comment}")]
    Rejected { url: String, comment: String },
}
