use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cause_reported_once() {
        let err = Error::from(io::Error::new(io::ErrorKind::Other, "disk full"));
        let report = anyhow::Error::new(err);

        assert_eq!(report.chain().count(), 1);
        assert_eq!(format!("{report:#}"), "disk full");
    }
}
