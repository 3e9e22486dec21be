use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Error)]
pub enum BagError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
    #[error("start index {index} is out of range")]
    IndexOutOfRange { index: isize },
    #[error("{operation} is not implemented for bags")]
    NotImplemented { operation: &'static str },
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Error)]
pub enum InvalidArgument {
    #[error("no destination was given")]
    MissingDestination,
    #[error("a destination of length {length} cannot hold {required} elements from index {start}")]
    InsufficientSpace {
        length: usize,
        start: usize,
        required: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err: BagError = InvalidArgument::InsufficientSpace {
            length: 3,
            start: 2,
            required: 2,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "invalid argument: a destination of length 3 cannot hold 2 elements from index 2"
        );
        assert_eq!(
            BagError::IndexOutOfRange { index: -1 }.to_string(),
            "start index -1 is out of range"
        );
        assert_eq!(
            BagError::NotImplemented { operation: "hash" }.to_string(),
            "hash is not implemented for bags"
        );
    }
}
