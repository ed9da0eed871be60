use std::fmt::{self, Display};

/// Class of an HTTP status code, by its first digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusRange {
    /// 1xx
    Informational,
    /// 2xx
    Success,
    /// 3xx
    Redirection,
    /// 4xx
    ClientError,
    /// 5xx
    ServerError,
}

impl StatusRange {
    pub const ALL: [StatusRange; 5] = [
        StatusRange::Informational,
        StatusRange::Success,
        StatusRange::Redirection,
        StatusRange::ClientError,
        StatusRange::ServerError,
    ];

    /// Range the given status code belongs to, if any.
    pub fn of(status: u16) -> Option<StatusRange> {
        match status {
            100..=199 => Some(StatusRange::Informational),
            200..=299 => Some(StatusRange::Success),
            300..=399 => Some(StatusRange::Redirection),
            400..=499 => Some(StatusRange::ClientError),
            500..=599 => Some(StatusRange::ServerError),
            _ => None,
        }
    }

    pub fn contains(&self, status: u16) -> bool {
        StatusRange::of(status) == Some(*self)
    }
}

impl Display for StatusRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StatusRange::Informational => "1xx Informational",
            StatusRange::Success => "2xx Success",
            StatusRange::Redirection => "3xx Redirection",
            StatusRange::ClientError => "4xx Client Error",
            StatusRange::ServerError => "5xx Server Error",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn of_maps_boundaries() {
        assert_eq!(StatusRange::of(99), None);
        assert_eq!(StatusRange::of(100), Some(StatusRange::Informational));
        assert_eq!(StatusRange::of(299), Some(StatusRange::Success));
        assert_eq!(StatusRange::of(302), Some(StatusRange::Redirection));
        assert_eq!(StatusRange::of(404), Some(StatusRange::ClientError));
        assert_eq!(StatusRange::of(599), Some(StatusRange::ServerError));
        assert_eq!(StatusRange::of(600), None);
    }

    #[test]
    fn contains_is_exclusive_between_ranges() {
        for range in StatusRange::ALL {
            let hits = [150, 250, 350, 450, 550].iter().filter(|s| range.contains(**s)).count();
            assert_eq!(hits, 1, "{range}");
        }
    }

    #[test]
    fn display() {
        assert_eq!(StatusRange::ClientError.to_string(), "4xx Client Error");
    }
}
