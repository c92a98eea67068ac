//! Demo application for the floatbox dialog toolkit.
//!
//! Shows an uncontrolled trigger-driven dialog, a controlled dialog whose
//! open value lives in the host, and the prompt/message presets with
//! clipboard paste.

use std::cell::Cell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use clap::Parser as ClapParser;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use floatbox::dialog::presets::{ConfirmChoice, ConfirmDialog, MessageDialog, PromptDialog, PromptOutcome};
use floatbox::dialog::{Dialog, DialogPlacement, DialogSize};
use floatbox::input::{InputEvent, InputParser};
use floatbox::screen::Screen;
use floatbox::terminal::Terminal;
use floatbox::ui::{Button, Label, Rect, Spacer, Theme, WidgetNode};

#[derive(ClapParser)]
#[command(name = "floatbox-demo", about = "Floating dialog toolkit demo")]
struct Args {
    /// Panel size: small, medium, large, screen
    #[arg(long, default_value = "small")]
    size: String,

    /// Panel placement: top, bottom
    #[arg(long, default_value = "bottom")]
    placement: String,

    /// Keep the dialog open on outside clicks and Escape
    #[arg(long)]
    keep_open: bool,

    /// Theme: classic, dark
    #[arg(long, default_value = "classic")]
    theme: String,

    /// YAML config file; file values take precedence over flags
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Optional config file contents. Unknown size/placement names resolve to
/// the defaults, same as on the command line.
#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct DemoConfig {
    size: Option<String>,
    placement: Option<String>,
    close_outside: Option<bool>,
    theme: Option<String>,
}

struct Options {
    size: DialogSize,
    placement: DialogPlacement,
    close_outside: bool,
    theme: Theme,
}

impl Options {
    fn from_args(args: &Args) -> io::Result<Self> {
        let file = match &args.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)?;
                serde_yaml::from_str::<DemoConfig>(&text)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?
            }
            None => DemoConfig::default(),
        };

        let size = file.size.as_deref().unwrap_or(&args.size);
        let placement = file.placement.as_deref().unwrap_or(&args.placement);
        let theme = file.theme.as_deref().unwrap_or(&args.theme);

        Ok(Self {
            size: DialogSize::from_name(size),
            placement: DialogPlacement::from_name(placement),
            close_outside: file.close_outside.unwrap_or(!args.keep_open),
            theme: match theme.trim().to_ascii_lowercase().as_str() {
                "dark" => Theme::dark(),
                _ => Theme::classic(),
            },
        })
    }
}

fn init_tracing() {
    // Only log when asked; stderr output garbles the TUI unless
    // redirected, e.g. RUST_LOG=debug floatbox-demo 2>demo.log
    if std::env::var_os("RUST_LOG").is_some() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
}

fn demo_body() -> WidgetNode {
    WidgetNode::vstack("body")
        .leaf("line_0", Label::new("This panel traps focus while open."))
        .leaf("line_1", Label::new("Escape or an outside click dismisses it."))
        .child(WidgetNode::leaf("gap", Spacer::new()))
        .child(
            WidgetNode::hstack("buttons")
                .child(WidgetNode::leaf("left", Spacer::new()))
                .leaf("ok", Button::new("OK", "ok"))
                .child(WidgetNode::leaf("gap1", Spacer::fixed(2)))
                .leaf("more", Button::new("Details", "details"))
                .child(WidgetNode::leaf("right", Spacer::new()))
                .build(),
        )
        .build()
}

struct App {
    terminal: Terminal,
    screen: Screen,
    parser: InputParser,
    theme: Theme,
    /// Uncontrolled dialog opened by its trigger button.
    dialog: Dialog,
    /// Controlled dialog; the open value lives in `controlled_open`.
    controlled: Dialog,
    controlled_open: Rc<Cell<bool>>,
    prompt: PromptDialog,
    message: Option<MessageDialog>,
    quit_confirm: Option<ConfirmDialog>,
    clipboard: Option<arboard::Clipboard>,
    status: String,
    quit: bool,
}

impl App {
    fn new(options: Options) -> io::Result<Self> {
        let terminal = Terminal::new()?;
        let (width, height) = terminal.size();

        let dialog = Dialog::builder()
            .title("Floating dialog")
            .size(options.size)
            .placement(options.placement)
            .close_outside(options.close_outside)
            .trigger(Button::new("Open dialog", "open_demo"))
            .body(demo_body())
            .build()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        // The controlled dialog forwards intents into a host-owned cell;
        // the host syncs the value back each frame.
        let controlled_open = Rc::new(Cell::new(false));
        let intent_sink = Rc::clone(&controlled_open);
        let controlled = Dialog::builder()
            .open(false)
            .on_open_change(move |value| intent_sink.set(value))
            .title("Controlled dialog")
            .size(DialogSize::Medium)
            .placement(DialogPlacement::Top)
            .body(
                WidgetNode::vstack("body")
                    .leaf("line_0", Label::new("The host owns this open value."))
                    .leaf("line_1", Label::new("Press C again to close it."))
                    .child(WidgetNode::leaf("gap", Spacer::new()))
                    .build(),
            )
            .build()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        Ok(Self {
            terminal,
            screen: Screen::new(width, height),
            parser: InputParser::new(),
            theme: options.theme,
            dialog,
            controlled,
            controlled_open,
            prompt: PromptDialog::new("Rename", "New name:"),
            message: None,
            quit_confirm: None,
            clipboard: arboard::Clipboard::new().ok(),
            status: String::from("Ready"),
            quit: false,
        })
    }

    fn run(&mut self) -> io::Result<()> {
        while !self.quit {
            self.terminal.update_size();
            let (width, height) = self.terminal.size();
            if (width, height) != self.screen.size() {
                self.screen.resize(width, height);
                self.screen.invalidate();
            }

            // The host owns the controlled value; push it every frame.
            self.controlled.sync_open(self.controlled_open.get());

            self.draw();
            self.screen.flush(&mut self.terminal)?;

            let bytes = self.terminal.read_bytes()?;
            let mut events = self.parser.feed(&bytes);
            if bytes.is_empty() {
                if let Some(event) = self.parser.finish() {
                    events.push(event);
                }
            }
            for event in events {
                self.handle_event(&event);
            }
        }
        Ok(())
    }

    fn draw(&mut self) {
        let theme = self.theme.clone();
        let (width, _) = self.screen.size();
        self.screen.clear_with(theme.surface_fg, theme.surface_bg);

        self.screen.write_str(
            1,
            2,
            "floatbox demo",
            theme.surface_fg,
            theme.surface_bg,
        );
        let help = "T/click: trigger  C: controlled  P: prompt  Q: quit";
        self.screen
            .write_str(3, 2, help, theme.surface_fg, theme.surface_bg);

        let (_, height) = self.screen.size();
        self.screen.write_str(
            height.saturating_sub(1),
            2,
            &self.status,
            theme.surface_fg,
            theme.surface_bg,
        );

        let trigger_rect = Rect::new(2, 5, 16u16.min(width), 1);
        self.screen.set_cursor_visible(false);
        self.dialog.draw_trigger(&mut self.screen, trigger_rect, &theme);

        // Overlay passes, last writer on top.
        self.dialog.draw(&mut self.screen, &theme);
        self.controlled.draw(&mut self.screen, &theme);
        self.prompt.draw(&mut self.screen, &theme);
        if let Some(message) = &mut self.message {
            message.draw(&mut self.screen, &theme);
        }
        if let Some(confirm) = &mut self.quit_confirm {
            confirm.draw(&mut self.screen, &theme);
        }
    }

    fn handle_event(&mut self, event: &InputEvent) {
        // Modal surfaces get the event first, most recent on top.
        if let Some(confirm) = &mut self.quit_confirm {
            if let Some(choice) = confirm.handle_event(event) {
                self.quit_confirm = None;
                if choice == ConfirmChoice::Yes {
                    self.quit = true;
                }
            }
            return;
        }

        if let Some(message) = &mut self.message {
            if message.handle_event(event) {
                self.message = None;
            }
            return;
        }

        if self.prompt.is_open() {
            if let InputEvent::Ctrl('v') = event {
                if let Some(clipboard) = &mut self.clipboard {
                    if let Ok(text) = clipboard.get_text() {
                        self.prompt.paste(&text);
                    }
                }
                return;
            }
            if let Some(outcome) = self.prompt.handle_event(event) {
                self.status = match outcome {
                    PromptOutcome::Submitted(text) => format!("Renamed to {text:?}"),
                    PromptOutcome::Cancelled => String::from("Rename cancelled"),
                };
            }
            return;
        }

        if self.controlled.is_open() {
            self.controlled.handle_event(event);
            return;
        }

        match self.dialog.handle_event(event) {
            floatbox::ui::EventResult::Action(action) => {
                match action.as_str() {
                    "ok" => {
                        self.dialog.set_open(false);
                        self.status = String::from("Dialog confirmed");
                    }
                    "details" => {
                        self.dialog.set_open(false);
                        self.message = Some(MessageDialog::new(
                            "Details",
                            "Dialogs are drawn in a root overlay\npass above the host surface.",
                        ));
                        if let Some(message) = &mut self.message {
                            message.open();
                        }
                    }
                    _ => {}
                }
                return;
            }
            floatbox::ui::EventResult::Consumed => return,
            floatbox::ui::EventResult::Ignored => {}
        }

        // Host-level keys, only reachable while nothing modal is open.
        match event {
            InputEvent::Char('q') => {
                let mut confirm = ConfirmDialog::new("Quit", "Leave the demo?");
                confirm.open();
                self.quit_confirm = Some(confirm);
            }
            InputEvent::Ctrl('q') | InputEvent::Ctrl('c') => {
                self.quit = true;
            }
            InputEvent::Char('t') => self.dialog.toggle(),
            InputEvent::Char('c') => {
                // The host flips its own state; the sync in the run loop
                // moves the dialog.
                self.controlled_open.set(!self.controlled_open.get());
            }
            InputEvent::Char('p') => self.prompt.open(),
            _ => {}
        }
    }
}

fn main() -> io::Result<()> {
    init_tracing();
    let args = Args::parse();
    let options = Options::from_args(&args)?;
    App::new(options)?.run()
}
