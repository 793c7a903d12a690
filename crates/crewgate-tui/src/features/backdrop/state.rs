use std::time::Duration;

use crewgate_core::assets::{Fit, PixelGrid, SourceImage};

use crate::common::TaskKind;

/// Brightness kept for the background so text stays readable on top of it.
const BACKGROUND_DIM: f32 = 0.45;

/// Logo bounds, in terminal cells.
pub const LOGO_COLS: u16 = 24;
pub const LOGO_ROWS: u16 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetSlot {
    Background,
    Logo,
}

impl AssetSlot {
    pub fn label(self) -> &'static str {
        match self {
            AssetSlot::Background => "background",
            AssetSlot::Logo => "logo",
        }
    }

    pub fn task_kind(self) -> TaskKind {
        match self {
            AssetSlot::Background => TaskKind::BackgroundLoad,
            AssetSlot::Logo => TaskKind::LogoLoad,
        }
    }
}

static NO_GRID: PixelGrid = PixelGrid::EMPTY;

/// Decoded sources plus grids fitted to the current terminal size.
///
/// Every background frame is fitted up front; `advance` only moves the
/// frame cursor.
#[derive(Debug, Default)]
pub struct BackdropState {
    background: Option<SourceImage>,
    logo: Option<SourceImage>,
    background_frames: Vec<PixelGrid>,
    logo_grid: PixelGrid,
    size: (u16, u16),
    frame_index: usize,
    frame_elapsed: Duration,
}

impl BackdropState {
    /// The background frame currently on screen.
    pub fn background(&self) -> &PixelGrid {
        self.background_frames
            .get(self.frame_index)
            .unwrap_or(&NO_GRID)
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn is_animated(&self) -> bool {
        self.background.as_ref().is_some_and(SourceImage::is_animated)
    }

    /// Moves the background animation forward by `elapsed`. Returns whether
    /// the visible frame changed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let Some(source) = self.background.as_ref().filter(|s| s.is_animated()) else {
            return false;
        };
        let count = source.frame_count();
        let cycle: Duration = (0..count).map(|i| source.frame_delay(i)).sum();

        self.frame_elapsed += elapsed;
        if self.frame_elapsed >= cycle {
            // Skip whole loops after a long stall.
            let rem = self.frame_elapsed.as_nanos() % cycle.as_nanos();
            self.frame_elapsed = Duration::from_nanos(rem as u64);
        }

        let start = self.frame_index;
        loop {
            let delay = source.frame_delay(self.frame_index);
            if self.frame_elapsed < delay {
                break;
            }
            self.frame_elapsed -= delay;
            self.frame_index = (self.frame_index + 1) % count;
        }
        self.frame_index != start
    }

    pub fn logo(&self) -> &PixelGrid {
        &self.logo_grid
    }

    /// Stores a decoded source and fits it to the last known size.
    pub fn set_source(&mut self, slot: AssetSlot, image: SourceImage) {
        match slot {
            AssetSlot::Background => {
                self.background = Some(image);
                self.frame_index = 0;
                self.frame_elapsed = Duration::ZERO;
                self.refit_background();
            }
            AssetSlot::Logo => {
                self.logo = Some(image);
                self.refit_logo();
            }
        }
    }

    /// Re-fits both grids when the terminal size changes.
    pub fn on_frame(&mut self, width: u16, height: u16) {
        if self.size == (width, height) {
            return;
        }
        self.size = (width, height);
        self.refit_background();
        self.refit_logo();
    }

    fn refit_background(&mut self) {
        let (cols, rows) = self.size;
        self.background_frames = match &self.background {
            Some(source) => source
                .fit_all(cols, rows, Fit::Cover)
                .into_iter()
                .map(|grid| grid.dimmed(BACKGROUND_DIM))
                .collect(),
            None => Vec::new(),
        };
    }

    fn refit_logo(&mut self) {
        let (cols, rows) = self.size;
        self.logo_grid = match &self.logo {
            Some(source) => source.fit(
                LOGO_COLS.min(cols.saturating_sub(2)),
                LOGO_ROWS.min(rows / 2),
                Fit::Contain,
            ),
            None => PixelGrid::empty(),
        };
    }
}

#[cfg(test)]
mod tests {
    use crewgate_core::assets::{Rgb, RgbImage};

    use super::*;

    fn solid(width: u32, height: u32) -> SourceImage {
        SourceImage::from_rgb(RgbImage::from_pixel(width, height, Rgb([200, 200, 200])))
    }

    #[test]
    fn grids_are_empty_until_sources_arrive() {
        let mut backdrop = BackdropState::default();
        backdrop.on_frame(80, 24);
        assert!(backdrop.background().is_empty());
        assert!(backdrop.logo().is_empty());
    }

    #[test]
    fn background_covers_the_terminal() {
        let mut backdrop = BackdropState::default();
        backdrop.on_frame(80, 24);
        backdrop.set_source(AssetSlot::Background, solid(320, 240));

        assert_eq!(backdrop.background().width(), 80);
        assert_eq!(backdrop.background().rows(), 24);
        let px = backdrop.background().pixel(0, 0).unwrap();
        assert!(px[0] < 200);
    }

    fn two_frame_loop() -> SourceImage {
        SourceImage::from_frames([
            (
                RgbImage::from_pixel(8, 8, Rgb([250, 0, 0])),
                Duration::from_millis(100),
            ),
            (
                RgbImage::from_pixel(8, 8, Rgb([0, 0, 250])),
                Duration::from_millis(50),
            ),
        ])
    }

    #[test]
    fn animated_background_follows_frame_delays() {
        let mut backdrop = BackdropState::default();
        backdrop.on_frame(4, 2);
        backdrop.set_source(AssetSlot::Background, two_frame_loop());
        assert!(backdrop.is_animated());

        assert!(!backdrop.advance(Duration::from_millis(60)));
        assert_eq!(backdrop.frame_index(), 0);
        assert!(backdrop.advance(Duration::from_millis(60)));
        assert_eq!(backdrop.frame_index(), 1);
        let px = backdrop.background().pixel(0, 0).unwrap();
        assert!(px[2] > px[0]);

        assert!(backdrop.advance(Duration::from_millis(40)));
        assert_eq!(backdrop.frame_index(), 0);
    }

    #[test]
    fn long_stall_wraps_around_the_loop() {
        let mut backdrop = BackdropState::default();
        backdrop.on_frame(4, 2);
        backdrop.set_source(AssetSlot::Background, two_frame_loop());

        // 10 full loops of 150ms plus 120ms lands in the second frame.
        backdrop.advance(Duration::from_millis(1_620));
        assert_eq!(backdrop.frame_index(), 1);
    }

    #[test]
    fn still_background_never_advances() {
        let mut backdrop = BackdropState::default();
        backdrop.on_frame(4, 2);
        backdrop.set_source(AssetSlot::Background, solid(8, 8));

        assert!(!backdrop.is_animated());
        assert!(!backdrop.advance(Duration::from_secs(5)));
        assert_eq!(backdrop.frame_index(), 0);
    }

    #[test]
    fn resize_keeps_the_current_frame() {
        let mut backdrop = BackdropState::default();
        backdrop.on_frame(4, 2);
        backdrop.set_source(AssetSlot::Background, two_frame_loop());
        backdrop.advance(Duration::from_millis(110));

        backdrop.on_frame(10, 5);
        assert_eq!(backdrop.frame_index(), 1);
        assert_eq!(backdrop.background().width(), 10);
    }

    #[test]
    fn resize_refits_existing_sources() {
        let mut backdrop = BackdropState::default();
        backdrop.set_source(AssetSlot::Background, solid(64, 64));
        backdrop.set_source(AssetSlot::Logo, solid(64, 64));
        assert!(backdrop.background().is_empty());

        backdrop.on_frame(40, 20);
        assert_eq!(backdrop.background().width(), 40);
        assert!(backdrop.logo().width() <= LOGO_COLS);
        assert!(backdrop.logo().rows() <= LOGO_ROWS);
        assert!(!backdrop.logo().is_empty());
    }
}
