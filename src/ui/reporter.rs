//! Console reporter
//!
//! Human-readable progress on stdout, warnings on stderr. While a wait is in
//! progress and animation is enabled, a spinner is redrawn at the bottom of
//! the output by a ticker thread; regular lines scroll above it.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use berth::Reporter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::context::UiContext;
use crate::ui::live_region::LiveRegion;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::spinner::{Spinner, TICK};

enum Stream {
    Out,
    Err,
}

struct Screen {
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
    region: LiveRegion,
    spinner: Option<Spinner>,
    animated: bool,
    unicode: bool,
    width: usize,
}

impl Screen {
    fn spinner_line(&self) -> String {
        match &self.spinner {
            Some(spinner) if self.animated => fit(spinner.render(self.unicode), self.width),
            _ => String::new(),
        }
    }

    fn print(&mut self, line: &str, stream: Stream) {
        let spinner_line = self.spinner_line();
        match stream {
            Stream::Out if self.animated => {
                let _ = self.region.println(&mut self.out, line, &spinner_line);
            }
            Stream::Out => {
                let _ = writeln!(self.out, "{line}");
                let _ = self.out.flush();
            }
            Stream::Err => {
                if self.animated {
                    let _ = self.region.clear(&mut self.out);
                }
                let _ = writeln!(self.err, "{line}");
                let _ = self.err.flush();
                if self.animated {
                    let _ = self.region.update(&mut self.out, &spinner_line);
                }
            }
        }
    }

    fn redraw(&mut self) {
        let spinner_line = self.spinner_line();
        let _ = self.region.update(&mut self.out, &spinner_line);
    }

    fn tick(&mut self) {
        if let Some(spinner) = self.spinner.as_mut() {
            spinner.tick();
            self.redraw();
        }
    }
}

/// Cut `line` so it never wraps; a wrapped spinner line would break redraws
fn fit(line: String, width: usize) -> String {
    if line.width() < width {
        return line;
    }
    let mut out = String::new();
    let mut used = 0;
    for c in line.chars() {
        let w = c.width().unwrap_or(0);
        if used + w >= width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

struct Ticker {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl Ticker {
    fn spawn(screen: Arc<Mutex<Screen>>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = thread::spawn(move || loop {
            thread::sleep(TICK);
            if flag.load(Ordering::Relaxed) {
                break;
            }
            match screen.lock() {
                Ok(mut screen) => screen.tick(),
                Err(_) => break,
            }
        });
        Self { stop, handle }
    }

    fn join(self) {
        self.stop.store(true, Ordering::Relaxed);
        let _ = self.handle.join();
    }
}

/// [`Reporter`] for interactive and plain-text console output
pub struct ConsoleReporter {
    ui: UiContext,
    screen: Arc<Mutex<Screen>>,
    ticker: Mutex<Option<Ticker>>,
}

impl ConsoleReporter {
    pub fn new(ui: UiContext) -> Self {
        Self::with_writers(ui, io::stdout(), io::stderr())
    }

    pub fn with_writers<O, E>(ui: UiContext, out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        let screen = Screen {
            out: Box::new(out),
            err: Box::new(err),
            region: LiveRegion::new(),
            spinner: None,
            animated: ui.animation,
            unicode: ui.unicode,
            width: usize::from(ui.caps.width),
        };
        Self {
            ui,
            screen: Arc::new(Mutex::new(screen)),
            ticker: Mutex::new(None),
        }
    }

    fn print(&self, line: &str, stream: Stream) {
        if let Ok(mut screen) = self.screen.lock() {
            screen.print(line, stream);
        }
    }

    fn icon_line(&self, icon: Icon, text: ColoredText) -> String {
        format!(
            "{} {}",
            icon.colored(self.ui.color, self.ui.unicode),
            text.render(self.ui.color)
        )
    }

    fn stop_ticker(&self) {
        let ticker = self.ticker.lock().ok().and_then(|mut t| t.take());
        if let Some(ticker) = ticker {
            ticker.join();
        }
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        if self.ui.is_quiet() {
            return;
        }
        self.print(
            &self.icon_line(Icon::Info, ColoredText::plain(message)),
            Stream::Out,
        );
    }

    fn warn(&self, message: &str) {
        self.print(
            &self.icon_line(Icon::Warning, ColoredText::warning(message)),
            Stream::Err,
        );
    }

    fn done(&self, message: &str) {
        if self.ui.is_quiet() {
            return;
        }
        self.print(
            &self.icon_line(Icon::Success, ColoredText::success(message)),
            Stream::Out,
        );
    }

    fn start_wait(&self, message: &str) {
        if self.ui.is_quiet() {
            return;
        }

        let Ok(mut guard) = self.screen.lock() else {
            return;
        };
        let screen = &mut *guard;
        match screen.spinner.as_mut() {
            Some(spinner) => spinner.set_message(message),
            None => screen.spinner = Some(Spinner::new(message)),
        }

        if !self.ui.animation {
            let line = self.icon_line(Icon::Arrow, ColoredText::dim(format!("{message}...")));
            screen.print(&line, Stream::Out);
            return;
        }
        screen.redraw();
        drop(guard);

        if let Ok(mut ticker) = self.ticker.lock() {
            if ticker.is_none() {
                *ticker = Some(Ticker::spawn(Arc::clone(&self.screen)));
            }
        }
    }

    fn stop_wait(&self) {
        self.stop_ticker();

        let Ok(mut guard) = self.screen.lock() else {
            return;
        };
        let screen = &mut *guard;
        let Some(spinner) = screen.spinner.take() else {
            return;
        };
        if screen.region.lines() > 0 {
            let _ = screen.region.clear(&mut screen.out);
        }
        if self.ui.is_verbose() {
            let line = spinner.finish(self.ui.color, self.ui.unicode);
            screen.print(&line, Stream::Out);
        }
    }

    fn output(&self, line: &str) {
        if self.ui.is_quiet() {
            return;
        }
        let line = format!("  {}", ColoredText::dim(line).render(self.ui.color));
        self.print(&line, Stream::Out);
    }
}

impl Drop for ConsoleReporter {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}
