//! Tests for periodic frame checkpoints

#[cfg(test)]
mod tests {
    use allrgb::io::checkpoint::FrameSaver;
    use allrgb::io::image::ImageRenderer;
    use allrgb::spatial::grid::Point;
    use image::{Rgb, Rgba};
    use tempfile::TempDir;

    // Tests that a frame is written every interval and a final partial frame on finish
    // Verified by writing a frame on every placement
    #[test]
    fn test_frames_every_interval() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut renderer = ImageRenderer::new(4, 2);
        let mut saver = FrameSaver::new(dir.path(), "step", 3);

        for index in 0..7 {
            renderer.paint(Point::new(index % 4, index / 4), Rgb([50, 50, 50]));
            saver.record(renderer.image(), index + 1).expect("Failed to record");
        }
        assert_eq!(saver.frames(), 2);

        let last = saver.finish(renderer.image()).expect("Failed to finish");

        assert_eq!(last, Some(saver.frame_path(2)));
        assert_eq!(saver.frames(), 3);
        for frame in 0..3 {
            assert!(saver.frame_path(frame).exists(), "frame {frame} missing");
        }
        assert!(saver.frame_path(0).ends_with("step_000000.png"));
    }

    // Tests that each frame captures the shared image as painted at that moment
    // Verified by writing frames from a stale copy of the image
    #[test]
    fn test_frames_capture_shared_image() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut renderer = ImageRenderer::new(2, 1);
        let mut saver = FrameSaver::new(dir.path(), "shared", 1);

        renderer.paint(Point::new(0, 0), Rgb([200, 10, 10]));
        saver.record(renderer.image(), 1).expect("Failed to record");
        renderer.paint(Point::new(1, 0), Rgb([10, 200, 10]));
        saver.record(renderer.image(), 2).expect("Failed to record");

        let first = image::open(saver.frame_path(0)).expect("Failed to read frame").to_rgba8();
        let second = image::open(saver.frame_path(1)).expect("Failed to read frame").to_rgba8();

        assert_eq!(first.get_pixel(0, 0), &Rgba([200, 10, 10, 255]));
        assert_eq!(first.get_pixel(1, 0).0[3], 0);
        assert_eq!(second.get_pixel(1, 0), &Rgba([10, 200, 10, 255]));
    }

    // Tests that finishing right after a frame writes nothing new
    // Verified by always writing on finish
    #[test]
    fn test_finish_without_pending() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut renderer = ImageRenderer::new(1, 1);
        let mut saver = FrameSaver::new(dir.path(), "step", 1);

        renderer.paint(Point::new(0, 0), Rgb([1, 1, 1]));
        saver.record(renderer.image(), 1).expect("Failed to record");

        assert_eq!(saver.finish(renderer.image()).expect("Failed to finish"), None);
        assert_eq!(saver.frames(), 1);
    }

    // Tests that interval zero disables checkpoints
    // Verified by treating zero as every placement
    #[test]
    fn test_zero_interval_disabled() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let frames_dir = dir.path().join("frames");
        let renderer = ImageRenderer::new(2, 2);
        let mut saver = FrameSaver::new(&frames_dir, "step", 0);

        saver.record(renderer.image(), 1).expect("Failed to record");

        assert!(!saver.is_enabled());
        assert_eq!(saver.finish(renderer.image()).expect("Failed to finish"), None);
        assert!(!frames_dir.exists());
        assert_eq!(saver.directory(), frames_dir.as_path());
    }
}
