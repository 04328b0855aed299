use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::app::input::{Command, Prompter};
use crate::app::{App, Message, Model, ToastLevel, update};
use crate::document::Document;

impl App {
    /// Run the session on the process's stdin and stdout.
    ///
    /// # Errors
    /// Returns an error if the terminal streams fail.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())?;
        Ok(())
    }

    /// Run the session until Exit or end of input and return the final model.
    ///
    /// # Errors
    /// Returns an error if reading `input` or writing `output` fails.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<Model> {
        let _run_scope = crate::perf::scope("app.run.total");
        let mut model = self.initial_model();
        let mut prompter = Prompter::new(input);

        loop {
            Self::flush_notices(&mut model, &mut output)?;
            if model.should_quit {
                break;
            }
            if self.show_menu {
                crate::ui::write_menu(&mut output).context("Failed to write menu")?;
            }

            let command = prompter
                .read_command(&mut output)
                .context("Failed to read command")?;
            match command {
                Command::Run(msg) => {
                    crate::perf::log_event("command", format!("{} {msg:?}", msg.name()));
                    let effect = matches!(msg, Message::Save(_) | Message::Open(_)).then(|| msg.clone());
                    model = update(model, msg);
                    if let Some(effect) = effect {
                        Self::handle_message_side_effects(&mut model, &effect);
                    }
                }
                Command::Rejected(reason) => {
                    crate::perf::log_event("command.rejected", reason);
                    model.notify(ToastLevel::Error, reason);
                }
                Command::Closed => {
                    // Terminate the dangling prompt before the final notices.
                    writeln!(output)?;
                    model = update(model, Message::Exit);
                }
            }
        }

        Ok(model)
    }

    fn initial_model(&self) -> Model {
        let mut model = Model::new(Document::new());
        let Some(path) = self.initial_file.as_deref() else {
            return model;
        };
        if path.exists() {
            Self::open_document(&mut model, path);
        } else {
            tracing::info!(path = %path.display(), "starting with a new file");
            model.notify(
                ToastLevel::Warning,
                format!("{} does not exist yet; starting empty.", path.display()),
            );
        }
        model
    }

    fn flush_notices(model: &mut Model, output: &mut impl Write) -> Result<()> {
        for notice in model.take_notices() {
            writeln!(output, "{}", crate::ui::render_notice(&notice))
                .context("Failed to write output")?;
        }
        output.flush().context("Failed to flush output")
    }
}
