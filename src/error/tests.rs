//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod stats_error_tests {
    use super::*;

    fn constraint_error() -> rusqlite::Error {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE t (name TEXT UNIQUE)", []).unwrap();
        conn.execute("INSERT INTO t VALUES ('a')", []).unwrap();
        conn.execute("INSERT INTO t VALUES ('a')", []).unwrap_err()
    }

    #[test]
    fn test_sqlite_error_conversion() {
        let err = StatsError::from(constraint_error());
        match err {
            StatsError::Sqlite(_) => (),
            _ => panic!("Expected Sqlite error variant"),
        }
    }

    #[test]
    fn test_sqlite_error_message_is_verbatim() {
        let raw = constraint_error();
        let raw_message = raw.to_string();
        let err = StatsError::from(raw);
        assert_eq!(err.to_string(), raw_message);
        assert!(err.to_string().contains("UNIQUE constraint failed"));
    }

    #[test]
    fn test_constraint_violation_detection() {
        assert!(StatsError::from(constraint_error()).is_constraint_violation());

        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let syntax = conn.execute("NOT SQL", []).unwrap_err();
        assert!(!StatsError::from(syntax).is_constraint_violation());

        assert!(!StatsError::validation("nope").is_constraint_violation());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err = StatsError::from(json_error);

        match err {
            StatsError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err = StatsError::from(io_error);

        match err {
            StatsError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<i64>().unwrap_err();
        let err = StatsError::from(parse_error);

        match err {
            StatsError::InvalidId(_) => (),
            _ => panic!("Expected InvalidId error variant"),
        }
    }

    #[test]
    fn test_connection_closed_message() {
        let err = StatsError::ConnectionClosed {
            path: PathBuf::from("/tmp/club.db"),
        };
        assert_eq!(
            err.to_string(),
            "Database connection to /tmp/club.db is closed; call open() first"
        );
    }

    #[test]
    fn test_validation_error() {
        let err = StatsError::validation("Team name is required");
        assert_eq!(err.to_string(), "Validation error: Team name is required");
    }

    #[test]
    fn test_data_dir_error() {
        let err = StatsError::DataDir {
            env_var: "NETBALL_STATS_DB".to_string(),
        };
        assert!(err.to_string().contains("NETBALL_STATS_DB"));
    }

    #[test]
    fn test_result_type_alias() {
        fn test_function() -> Result<String> {
            Ok("success".to_string())
        }

        assert_eq!(test_function().unwrap(), "success");
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let err: anyhow::Error = StatsError::validation("bad input").into();
        assert!(err.to_string().contains("bad input"));
        assert!(err.downcast_ref::<StatsError>().is_some());
    }
}
