// SPDX-FileCopyrightText: 2026 Mongopatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Driver error classification by server error code.

use std::error::Error;

use mongodb::error::{ErrorKind, WriteFailure};
use mongopatch_core::codes::DUPLICATE_KEY;
use mongopatch_core::{DriverError, ErrorCode, MongoPatchError};

/// Convert a driver error into [`MongoPatchError::Driver`], keeping the
/// original error as the source.
pub fn map_driver_err(err: mongodb::error::Error) -> MongoPatchError {
    let mut driver = DriverError::new(err.to_string());
    driver.codes = server_codes(&err);
    MongoPatchError::Driver(driver.with_source(err))
}

/// Every server error code a raw driver error carries.
///
/// Batch writes (`insert_many`, client bulk writes) report one code per
/// failed write plus any write concern codes; write errors come first, in
/// batch index order.
fn server_codes(err: &mongodb::error::Error) -> Vec<ErrorCode> {
    match err.kind.as_ref() {
        ErrorKind::Command(command) => vec![command.code.into()],
        ErrorKind::Write(WriteFailure::WriteError(write)) => vec![write.code.into()],
        ErrorKind::Write(WriteFailure::WriteConcernError(concern)) => vec![concern.code.into()],
        ErrorKind::InsertMany(failure) => failure
            .write_errors
            .iter()
            .flatten()
            .map(|write| write.code)
            .chain(failure.write_concern_error.iter().map(|concern| concern.code))
            .map(ErrorCode::from)
            .collect(),
        ErrorKind::BulkWrite(failure) => {
            let mut writes: Vec<_> = failure.write_errors.iter().collect();
            writes.sort_by_key(|(index, _)| **index);
            writes
                .into_iter()
                .map(|(_, write)| write.code)
                .chain(failure.write_concern_errors.iter().map(|concern| concern.code))
                .map(ErrorCode::from)
                .collect()
        }
        _ => Vec::new(),
    }
}

/// The codes of `error` when it is a driver error.
///
/// Driver errors are raw `mongodb` errors, [`DriverError`]s, and
/// [`MongoPatchError::Driver`]. Every other error yields no codes, whatever
/// fields it has.
pub fn driver_codes(error: &(dyn Error + 'static)) -> Vec<ErrorCode> {
    if let Some(raw) = error.downcast_ref::<mongodb::error::Error>() {
        return server_codes(raw);
    }
    if let Some(wrapped) = error.downcast_ref::<MongoPatchError>() {
        return wrapped
            .as_driver()
            .map(|driver| driver.codes.clone())
            .unwrap_or_default();
    }
    error
        .downcast_ref::<DriverError>()
        .map(|driver| driver.codes.clone())
        .unwrap_or_default()
}

/// Whether `error` is a driver error carrying `code`.
///
/// Codes are normalized first, so `11000` matches `"11000"`. A batch error
/// matches when any of its failed writes reported the code.
pub fn is_error(error: &(dyn Error + 'static), code: impl Into<ErrorCode>) -> bool {
    let expected = code.into();
    driver_codes(error).contains(&expected)
}

/// Whether `error` is a unique index violation reported by the driver.
pub fn is_duplicate_key_error(error: &(dyn Error + 'static)) -> bool {
    is_error(error, DUPLICATE_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    use mongodb::bson::{Document, doc, from_document};
    use mongodb::error::{BulkWriteError, InsertManyError, WriteConcernError, WriteError};

    fn write_error(code: i32) -> WriteError {
        from_document(doc! {
            "code": code,
            "codeName": "DuplicateKey",
            "errmsg": format!("E{code} write failed"),
        })
        .expect("write error reply")
    }

    fn write_concern_error(code: i32) -> WriteConcernError {
        from_document(doc! {
            "code": code,
            "codeName": "WriteConcernFailed",
            "errmsg": "waiting for replication timed out",
        })
        .expect("write concern error reply")
    }

    fn insert_many_error(reply: Document) -> mongodb::error::Error {
        let failure: InsertManyError = from_document(reply).expect("insert many reply");
        ErrorKind::InsertMany(failure).into()
    }

    /// A non-driver error that happens to carry a code field.
    #[derive(Debug)]
    struct GenericError {
        code: i32,
    }

    impl fmt::Display for GenericError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "generic failure {}", self.code)
        }
    }

    impl Error for GenericError {}

    #[test]
    fn duplicate_key_with_numeric_code() {
        let err = MongoPatchError::Driver(DriverError::new("E11000").with_code(11000));
        assert!(is_duplicate_key_error(&err));
        assert!(is_error(&err, 11000));
        assert!(is_error(&err, "11000"));
    }

    #[test]
    fn duplicate_key_with_string_code() {
        let err = DriverError::new("E11000").with_code("11000");
        assert!(is_duplicate_key_error(&err));
        assert!(is_error(&err, DUPLICATE_KEY));
    }

    #[test]
    fn other_driver_codes_do_not_match() {
        let err = MongoPatchError::Driver(DriverError::new("unauthorized").with_code(13));
        assert!(!is_duplicate_key_error(&err));
        assert!(is_error(&err, 13));
    }

    #[test]
    fn driver_error_without_code_does_not_match() {
        let err = MongoPatchError::Driver(DriverError::new("socket closed"));
        assert!(!is_duplicate_key_error(&err));
        assert!(driver_codes(&err).is_empty());
    }

    #[test]
    fn non_driver_errors_never_match() {
        let generic = GenericError { code: 11000 };
        assert!(!is_duplicate_key_error(&generic));

        let config = MongoPatchError::Config("11000".into());
        assert!(!is_duplicate_key_error(&config));

        let io = std::io::Error::other("E11000 duplicate key");
        assert!(!is_duplicate_key_error(&io));
    }

    #[tokio::test]
    async fn mapped_driver_error_keeps_message_and_source() {
        let raw = mongodb::options::ClientOptions::parse("not-a-connection-string")
            .await
            .expect_err("invalid uri should not parse");
        let message = raw.to_string();
        let mapped = map_driver_err(raw);

        let driver = mapped.as_driver().expect("driver variant");
        assert_eq!(driver.message, message);
        assert!(driver.codes.is_empty());
        assert!(
            Error::source(driver)
                .and_then(|s| s.downcast_ref::<mongodb::error::Error>())
                .is_some()
        );
        assert!(!is_duplicate_key_error(&mapped));
    }

    #[test]
    fn single_write_error_is_classified() {
        let raw: mongodb::error::Error =
            ErrorKind::Write(WriteFailure::WriteError(write_error(11000))).into();
        assert!(is_duplicate_key_error(&raw));

        let mapped = map_driver_err(raw);
        assert!(is_duplicate_key_error(&mapped));
    }

    #[test]
    fn write_concern_failure_is_not_a_duplicate_key() {
        let raw: mongodb::error::Error =
            ErrorKind::Write(WriteFailure::WriteConcernError(write_concern_error(64))).into();
        assert!(is_error(&raw, 64));
        assert!(!is_duplicate_key_error(&raw));
    }

    #[test]
    fn insert_many_duplicate_key_is_classified() {
        let raw = insert_many_error(doc! {
            "writeErrors": [
                { "index": 0, "code": 11000, "codeName": "DuplicateKey", "errmsg": "E11000 duplicate key error" },
            ],
        });
        assert!(is_duplicate_key_error(&raw));
        assert_eq!(driver_codes(&raw), vec![ErrorCode::from(11000)]);

        let mapped = map_driver_err(raw);
        assert!(is_duplicate_key_error(&mapped));
    }

    #[test]
    fn insert_many_matches_any_failed_write() {
        let raw = insert_many_error(doc! {
            "writeErrors": [
                { "index": 0, "code": 121, "codeName": "DocumentValidationFailure", "errmsg": "validation failed" },
                { "index": 3, "code": 11000, "codeName": "DuplicateKey", "errmsg": "E11000 duplicate key error" },
            ],
            "writeConcernError": { "code": 64, "codeName": "WriteConcernFailed", "errmsg": "timed out" },
        });
        assert_eq!(
            driver_codes(&raw),
            vec![ErrorCode::from(121), ErrorCode::from(11000), ErrorCode::from(64)]
        );
        assert!(is_duplicate_key_error(&raw));
        assert!(is_error(&raw, "121"));
        assert!(is_error(&raw, 64));
        assert!(!is_error(&raw, 13));
    }

    #[test]
    fn insert_many_without_write_errors_does_not_match() {
        let raw = insert_many_error(doc! {
            "writeConcernError": { "code": 64, "codeName": "WriteConcernFailed", "errmsg": "timed out" },
        });
        assert!(!is_duplicate_key_error(&raw));
        assert!(is_error(&raw, 64));
    }

    #[test]
    fn client_bulk_write_duplicate_key_is_classified() {
        let mut failure = BulkWriteError::default();
        failure.write_errors.insert(4, write_error(11000));
        failure.write_errors.insert(1, write_error(121));
        failure.write_concern_errors.push(write_concern_error(64));
        let raw: mongodb::error::Error = ErrorKind::BulkWrite(failure).into();

        assert_eq!(
            driver_codes(&raw),
            vec![ErrorCode::from(121), ErrorCode::from(11000), ErrorCode::from(64)]
        );
        assert!(is_duplicate_key_error(&raw));

        let mapped = map_driver_err(raw);
        assert!(mapped.as_driver().is_some_and(|d| d.has_code(&ErrorCode::from(11000))));
    }
}
