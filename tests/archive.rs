#[cfg(test)]
mod tests {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use hugo_updater::libs::archive::extract_entry;
    use hugo_updater::libs::error::{UpdateError, EXIT_FORMAT};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    const HUGO_BYTES: &[u8] = b"\x7fELF fake hugo executable\x00\x01\x02";

    struct ArchiveTestContext {
        _temp_dir: TempDir,
        destination: PathBuf,
    }

    impl TestContext for ArchiveTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            ArchiveTestContext {
                destination: temp_dir.path().join("hugo"),
                _temp_dir: temp_dir,
            }
        }
    }

    fn tar_gz(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut builder = tar::Builder::new(GzEncoder::new(Vec::new(), Compression::default()));
        for (name, data) in entries {
            let mut header = tar::Header::new_gnu();
            header.set_size(data.len() as u64);
            header.set_mode(0o644);
            builder.append_data(&mut header, name, *data).unwrap();
        }
        builder.into_inner().unwrap().finish().unwrap()
    }

    fn release_archive() -> Vec<u8> {
        tar_gz(&[
            ("LICENSE", b"Apache License".as_slice()),
            ("README.md", b"# Hugo".as_slice()),
            ("hugo", HUGO_BYTES),
        ])
    }

    #[test_context(ArchiveTestContext)]
    #[test]
    fn test_extracts_named_entry_byte_for_byte(ctx: &mut ArchiveTestContext) {
        let written = extract_entry(&release_archive(), "hugo", &ctx.destination).unwrap();

        assert_eq!(written, HUGO_BYTES.len() as u64);
        assert_eq!(fs::read(&ctx.destination).unwrap(), HUGO_BYTES);
    }

    #[test_context(ArchiveTestContext)]
    #[test]
    fn test_only_the_named_entry_is_written(ctx: &mut ArchiveTestContext) {
        extract_entry(&release_archive(), "hugo", &ctx.destination).unwrap();

        let dir = ctx.destination.parent().unwrap();
        let names: Vec<_> = fs::read_dir(dir).unwrap().map(|e| e.unwrap().file_name()).collect();
        assert_eq!(names, vec![std::ffi::OsString::from("hugo")]);
    }

    #[test_context(ArchiveTestContext)]
    #[test]
    fn test_replaces_existing_binary(ctx: &mut ArchiveTestContext) {
        fs::write(&ctx.destination, b"old hugo build that is much longer than the new one").unwrap();

        extract_entry(&release_archive(), "hugo", &ctx.destination).unwrap();
        assert_eq!(fs::read(&ctx.destination).unwrap(), HUGO_BYTES);
    }

    #[test_context(ArchiveTestContext)]
    #[test]
    fn test_nested_entry_with_same_file_name_is_not_matched(ctx: &mut ArchiveTestContext) {
        let archive = tar_gz(&[("docs/hugo", b"not the binary".as_slice())]);

        let err = extract_entry(&archive, "hugo", &ctx.destination).unwrap_err();
        assert!(matches!(err, UpdateError::EntryNotFound(ref name) if name == "hugo"));
        assert!(!ctx.destination.exists());
    }

    #[test_context(ArchiveTestContext)]
    #[test]
    fn test_missing_entry_is_an_extraction_error(ctx: &mut ArchiveTestContext) {
        let archive = tar_gz(&[("README.md", b"# Hugo".as_slice())]);

        let err = extract_entry(&archive, "hugo", &ctx.destination).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_FORMAT);
        assert!(!ctx.destination.exists());
    }

    #[test_context(ArchiveTestContext)]
    #[test]
    fn test_garbage_payload_is_an_extraction_error(ctx: &mut ArchiveTestContext) {
        let err = extract_entry(b"<html>Not Found</html>", "hugo", &ctx.destination).unwrap_err();

        assert!(matches!(err, UpdateError::Extraction(_)));
        assert_eq!(err.exit_code(), EXIT_FORMAT);
        assert!(!ctx.destination.exists());
    }

    #[test_context(ArchiveTestContext)]
    #[test]
    fn test_failed_install_leaves_no_staging_file(ctx: &mut ArchiveTestContext) {
        fs::create_dir(&ctx.destination).unwrap();
        fs::write(ctx.destination.join("keep"), b"occupied").unwrap();

        let err = extract_entry(&release_archive(), "hugo", &ctx.destination).unwrap_err();
        assert!(matches!(err, UpdateError::Io { .. }));

        let dir = ctx.destination.parent().unwrap();
        assert!(!dir.join("hugo.download").exists());
        assert!(ctx.destination.join("keep").exists());
    }

    #[cfg(unix)]
    #[test_context(ArchiveTestContext)]
    #[test]
    fn test_extracted_binary_is_executable(ctx: &mut ArchiveTestContext) {
        use std::os::unix::fs::PermissionsExt;

        extract_entry(&release_archive(), "hugo", &ctx.destination).unwrap();
        let mode = fs::metadata(&ctx.destination).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
