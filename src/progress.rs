use indicatif::{ProgressBar, ProgressStyle};
use once_cell::sync::Lazy;

const PB_STYLE: &str = "{spinner:.blue} [{elapsed_precise}] {wide_bar:.cyan/blue} {pos}/{len} letters {msg}";

const TICK: &str = "⠁⠂⠄⡀⢀⠠⠐⠈ ";

const PB_CHARS: &str = "█▓▒░  ";

static PB_TEMPLATE: Lazy<Option<ProgressStyle>> = Lazy::new(|| {
    let pb_style = match ProgressStyle::with_template(PB_STYLE) {
        Ok(pb_style) => pb_style.tick_chars(TICK).progress_chars(PB_CHARS),
        Err(_) => return None,
    };

    Some(pb_style)
});

/// Progress over the letters of the alphabet.
///
/// The bar draws on stderr; status lines always go to stdout, with the bar
/// cleared while they print.
pub struct LetterProgress {
    pb: ProgressBar,
}

impl LetterProgress {
    pub fn new(len: usize, visible: bool) -> Self {
        let pb = if visible {
            ProgressBar::new(len as u64)
        } else {
            ProgressBar::hidden()
        };

        if let Some(style) = PB_TEMPLATE.as_ref() {
            pb.set_style(style.clone());
        }
        Self { pb }
    }

    pub fn start_letter(&self, letter: char) {
        self.pb.set_message(format!("fetching '{letter}'"));
    }

    pub fn println(&self, line: impl AsRef<str>) {
        self.pb.suspend(|| println!("{}", line.as_ref()));
    }

    pub fn advance(&self) {
        self.pb.inc(1);
    }

    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}
