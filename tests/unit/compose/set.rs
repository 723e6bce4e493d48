//! Tests for the random patch set

#[cfg(test)]
mod tests {
    use gaborsheet::GaborError;
    use gaborsheet::compose::RandomSetComposer;
    use gaborsheet::io::progress::ProgressManager;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // Tests N files are written with sequential padded names
    // Verified by starting the index at zero
    #[test]
    fn test_writes_count_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let composer = RandomSetComposer::new(temp_dir.path(), 3);

        let written = composer
            .compose(&mut StdRng::seed_from_u64(10), None)
            .unwrap();

        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["gabor_001.png", "gabor_002.png", "gabor_003.png"]);
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 3);
    }

    // Tests each file is square with a size from the random range
    // Verified by using a fixed size
    #[test]
    fn test_file_dimensions() {
        let temp_dir = tempfile::tempdir().unwrap();
        let composer = RandomSetComposer::new(temp_dir.path(), 4);

        for path in composer
            .compose(&mut StdRng::seed_from_u64(77), None)
            .unwrap()
        {
            let image = image::open(&path).unwrap().to_rgba8();
            let (width, height) = image.dimensions();
            assert_eq!(width, height);
            assert!((96..=512).contains(&width));
            assert!(image.pixels().all(|p| p.0[0] == p.0[1] && p.0[3] == 255));
        }
    }

    // Tests an empty set writes nothing
    // Verified by iterating 0..=count
    #[test]
    fn test_zero_count() {
        let temp_dir = tempfile::tempdir().unwrap();
        let written = RandomSetComposer::new(temp_dir.path(), 0)
            .compose(&mut StdRng::seed_from_u64(0), None)
            .unwrap();

        assert!(written.is_empty());
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    // Tests a missing output directory is fatal
    // Verified by creating the directory on demand
    #[test]
    fn test_missing_output_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("set");

        let err = RandomSetComposer::new(&missing, 2)
            .compose(&mut StdRng::seed_from_u64(0), None)
            .unwrap_err();
        assert!(matches!(err, GaborError::FileSystem { .. }));
        assert!(!missing.exists());
    }

    // Tests a reported run writes the same files and closes its stage
    // Verified by returning before the stage finishes
    #[test]
    fn test_progress_run_matches_quiet_run() {
        let quiet_dir = tempfile::tempdir().unwrap();
        let reported_dir = tempfile::tempdir().unwrap();
        let mut pm = ProgressManager::new();

        let quiet = RandomSetComposer::new(quiet_dir.path(), 2)
            .compose(&mut StdRng::seed_from_u64(4), None)
            .unwrap();
        let reported = RandomSetComposer::new(reported_dir.path(), 2)
            .compose(&mut StdRng::seed_from_u64(4), Some(&mut pm))
            .unwrap();

        assert!(pm.stage_position().is_none());
        assert_eq!(reported.len(), quiet.len());
        for (a, b) in quiet.iter().zip(&reported) {
            assert_eq!(a.file_name(), b.file_name());
            assert_eq!(std::fs::read(a).unwrap(), std::fs::read(b).unwrap());
        }
    }
}
