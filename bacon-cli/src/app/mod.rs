mod handlers;
mod state;


pub use state::{parse_video_length, MenuChoice};

use anyhow::Result;
use bacon_store::state::AppState;
use bacon_types::User;
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};

/// Interactive session for one logged-in user.
///
/// Generic over its input and output so tests can script a whole session.
pub struct App<R, W> {
    state: AppState,
    current_user: User,
    input: R,
    output: W,
    rng: StdRng,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Greet, ask for a username (unless one is given) and register or fetch it.
    ///
    /// Surrounding whitespace is trimmed from the username. A storage error
    /// while registering is reported and the username is asked for again.
    /// Returns `Ok(None)` when input ends before a user is registered.
    pub fn start(
        state: AppState,
        mut input: R,
        mut output: W,
        rng: StdRng,
        username: Option<String>,
    ) -> Result<Option<Self>> {
        writeln!(output, "Welcome to the Bacon Social Media Platform!")?;

        let mut given = username.map(|name| name.trim().to_string());
        let (current_user, created) = loop {
            let username = match given.take() {
                Some(name) if !name.is_empty() => name,
                _ => match read_username(&mut input, &mut output)? {
                    Some(name) => name,
                    None => return Ok(None),
                },
            };

            match state.users.get_or_create(&username) {
                Ok(registered) => break registered,
                Err(e) => {
                    tracing::error!("Failed to register user {}: {}", username, e);
                    writeln!(output, "Error registering user: {}", e)?;
                }
            }
        };

        if created {
            writeln!(output, "Welcome, {}!", current_user.username)?;
        } else {
            writeln!(output, "Welcome back, {}!", current_user.username)?;
        }
        tracing::info!("Session started for {} (id {})", current_user.username, current_user.id);

        Ok(Some(Self {
            state,
            current_user,
            input,
            output,
            rng,
        }))
    }

    pub fn current_user(&self) -> &User {
        &self.current_user
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// Storage failures are reported and the loop continues; only terminal
    /// I/O errors end it early.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;

            let Some(line) = self.prompt("What would you like to do? ")? else {
                writeln!(self.output)?;
                writeln!(self.output, "Goodbye!")?;
                return Ok(());
            };

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                Some(choice) => self.handle_choice(choice)?,
                None => writeln!(self.output, "Invalid choice. Please select again.")?,
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Options:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.key(), choice.label())?;
        }
        Ok(())
    }

    /// Print `message` and read one line; `None` at end of input
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        read_prompt(&mut self.input, &mut self.output, message)
    }
}

/// Prompt until a non-blank username is entered; `None` at end of input
fn read_username<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<String>> {
    loop {
        match read_prompt(input, output, "Enter your username: ")? {
            None => return Ok(None),
            Some(name) if name.trim().is_empty() => {
                writeln!(output, "Username cannot be empty.")?;
            }
            Some(name) => return Ok(Some(name.trim().to_string())),
        }
    }
}

fn read_prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}
