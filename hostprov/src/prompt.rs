//! Interactive decision points, behind the [`Prompt`] capability so a test
//! harness can script them.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};

use crate::backend::{BackendError, IdentityDirectory, Prompt};
use crate::config::Settings;
use crate::error::ProvisionError;

/// Console-backed prompt: y/n confirmation and a numbered container menu.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> Result<bool, BackendError> {
        print!("{message} [y/N] ");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        let answer = line.trim().to_ascii_lowercase();
        Ok(answer == "y" || answer == "yes")
    }

    fn select_container(&self, candidates: &[String]) -> Result<usize, BackendError> {
        for (i, candidate) in candidates.iter().enumerate() {
            println!("{:>3}. {candidate}", i + 1);
        }
        read_selection(&mut io::stdin().lock(), candidates.len())
    }
}

/// Read a 1-based menu choice, re-prompting on anything unparseable. A
/// closed input stream aborts the selection; re-prompting would never
/// terminate once there is nothing left to read.
fn read_selection(input: &mut impl BufRead, count: usize) -> Result<usize, BackendError> {
    loop {
        print!("container [1-{count}]: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(BackendError::Output {
                tool: "prompt".to_string(),
                detail: "input closed before a container was selected".to_string(),
            });
        }
        if let Ok(choice) = line.trim().parse::<usize>() {
            if (1..=count).contains(&choice) {
                return Ok(choice - 1);
            }
        }
        eprintln!("warning: enter a number between 1 and {count}");
    }
}

/// Scripted prompt for tests and non-interactive callers: fixed confirmation
/// answer and a queue of selection indices.
pub struct ScriptedPrompt {
    confirm_answer: bool,
    selections: RefCell<Vec<usize>>,
}

impl ScriptedPrompt {
    pub fn new(confirm_answer: bool, selections: Vec<usize>) -> Self {
        Self {
            confirm_answer,
            selections: RefCell::new(selections),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, _message: &str) -> Result<bool, BackendError> {
        Ok(self.confirm_answer)
    }

    fn select_container(&self, candidates: &[String]) -> Result<usize, BackendError> {
        let mut selections = self.selections.borrow_mut();
        if selections.is_empty() {
            return Ok(0);
        }
        let choice = selections.remove(0);
        if choice >= candidates.len() {
            return Err(BackendError::Output {
                tool: "prompt".to_string(),
                detail: format!(
                    "scripted selection {choice} out of range for {} candidates",
                    candidates.len()
                ),
            });
        }
        Ok(choice)
    }
}

/// Present the candidate containers and resolve the final placement.
///
/// Laptop mode narrows the menu to containers whose path carries the
/// configured laptop marker. Picking the temporary staging container is
/// honored but redirected: the object lands in the fallback container and
/// the caller is warned to relocate it manually.
pub fn choose_container(
    directory: &dyn IdentityDirectory,
    prompt: &dyn Prompt,
    settings: &Settings,
    laptop_mode: bool,
) -> Result<String, ProvisionError> {
    let mut candidates = directory.containers()?;
    if laptop_mode {
        let marker = settings.laptop_marker.to_ascii_lowercase();
        candidates.retain(|c| c.to_ascii_lowercase().contains(&marker));
    }
    if candidates.is_empty() {
        return Err(ProvisionError::NotFound(if laptop_mode {
            format!(
                "no containers matching laptop marker '{}'",
                settings.laptop_marker
            )
        } else {
            "no organizational containers available".to_string()
        }));
    }

    let index = prompt.select_container(&candidates)?;
    let chosen = candidates[index].clone();
    if chosen == settings.temporary_container {
        eprintln!(
            "warning: '{chosen}' is a temporary container; placing in '{}' instead, relocate manually after creation",
            settings.fallback_container
        );
        return Ok(settings.fallback_container.clone());
    }
    Ok(chosen)
}
