//! Integration tests for billing a CSV call table end to end

#[cfg(test)]
mod tests {
    use phonebill_core::AppError;
    use phonebill_services::{BillingService, CsvCallSource};
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_bill_sample_file() {
        let file = csv_file(
            "phone_number,start,end\n\
             420600768405,2022-05-21 10:50:13,2022-05-21 10:52:11\n\
             420490506169,2022-05-21 20:14:14,2022-05-21 20:18:12\n\
             420448147315,2022-05-24 04:32:01,2022-05-24 04:35:14\n\
             420306421116,2022-05-26 14:19:13,2022-05-26 14:20:36\n",
        );

        let mut source = CsvCallSource::open(file.path()).unwrap();
        let summary = BillingService::default().bill(&mut source).unwrap();

        assert_eq!(summary.favorite_id, 420490506169);
        assert_eq!(summary.gross_cost, dec!(558));
        assert_eq!(summary.total_cost, 556);
    }

    #[test]
    fn test_bill_mixed_tiers() {
        let file = csv_file(
            "phone_number,start,end\n\
             420774577453,2022-05-21 07:55:00,2022-05-21 08:05:30\n\
             420776562353,2022-05-21 15:50:00,2022-05-21 16:10:00\n\
             420774577453,2022-05-21 20:00:00,2022-05-21 20:10:00\n",
        );

        let mut source = CsvCallSource::open(file.path()).unwrap();
        let summary = BillingService::default().bill(&mut source).unwrap();

        // 420774577453: 11 + 10 minutes, 9.7 + 6
        // 420776562353: 20 minutes, 480 peak from 08:00 + 5 + 3
        assert_eq!(summary.contacts.len(), 2);
        assert_eq!(summary.favorite_id, 420774577453);
        assert_eq!(summary.exempted, dec!(15.7));
        assert_eq!(summary.total_cost, 488);
    }

    #[test]
    fn test_header_only_file_is_empty_dataset() {
        let file = csv_file("phone_number,start,end\n");
        let mut source = CsvCallSource::open(file.path()).unwrap();

        let err = BillingService::default().bill(&mut source).unwrap_err();
        assert!(matches!(err, AppError::EmptyDataset));
    }

    #[test]
    fn test_malformed_timestamp_aborts() {
        let file = csv_file(
            "phone_number,start,end\n\
             420600768405,2022-05-21 10:50:13,2022-05-21 10:52:11\n\
             420490506169,21.05.2022 20:14,2022-05-21 20:18:12\n",
        );
        let mut source = CsvCallSource::open(file.path()).unwrap();

        let err = BillingService::default().bill(&mut source).unwrap_err();
        assert!(matches!(err, AppError::MalformedTimestamp { line: 3, .. }));
    }

    #[test]
    fn test_directory_is_invalid_file() {
        let dir = tempfile::tempdir().unwrap();

        let result = CsvCallSource::open(dir.path()).and_then(|mut source| {
            BillingService::default().bill(&mut source)
        });

        assert!(matches!(result, Err(AppError::MissingOrInvalidFile(_))));
    }
}
