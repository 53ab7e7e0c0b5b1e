//! Menu-driven interactive session.
//!
//! The shell owns the 1-based numbering shown to the user and the trailing
//! "Back to main menu" entry; the index itself is addressed with 0-based
//! positions.

use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::debug;
use wordhoard_core::{
    store, validate_text, validate_word, AddOutcome, Config, Definition, DictionaryIndex,
    PartOfSpeech, WordEntry,
};

const MENU: &str = "Main Menu
1.  Get metadata
2.  Get words in range
3.  Get word
4.  Get first word
5.  Get last word
6.  Get parts of speech
7.  Update definition
8.  Delete definition
9.  Add new definition
10. Save dictionary
11. Exit

Select an option: ";

/// A main-menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Statistics,
    WordsInRange,
    Lookup,
    FirstWord,
    LastWord,
    PartsOfSpeech,
    UpdateDefinition,
    RemoveDefinition,
    AddDefinition,
    Save,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim().parse::<u32>().ok()? {
            1 => Self::Statistics,
            2 => Self::WordsInRange,
            3 => Self::Lookup,
            4 => Self::FirstWord,
            5 => Self::LastWord,
            6 => Self::PartsOfSpeech,
            7 => Self::UpdateDefinition,
            8 => Self::RemoveDefinition,
            9 => Self::AddDefinition,
            10 => Self::Save,
            11 => Self::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

/// Whether the menu loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// A definition picked from a numbered listing.
enum Selection {
    Definition(usize),
    Back,
}

/// Interactive menu over a dictionary, reading commands from `input` and
/// writing prompts and results to `output`.
pub struct Shell<R, W> {
    index: DictionaryIndex,
    config: Config,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell over `index`.
    pub fn new(index: DictionaryIndex, config: Config, input: R, output: W) -> Self {
        Self {
            index,
            config,
            input,
            output,
        }
    }

    /// Returns the dictionary being edited.
    #[cfg(test)]
    pub fn index(&self) -> &DictionaryIndex {
        &self.index
    }

    /// Runs the menu loop until Exit is chosen or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{MENU}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            let flow = match MenuChoice::parse(&line) {
                Some(choice) => {
                    debug!(?choice, "menu selection");
                    self.dispatch(choice)?
                }
                None => {
                    writeln!(self.output, "\nInvalid Selection\n")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        match choice {
            MenuChoice::Statistics => {
                writeln!(self.output, "\n{}\n", self.index.statistics())?;
                Ok(Flow::Continue)
            }
            MenuChoice::WordsInRange => self.words_in_range(),
            MenuChoice::Lookup => self.lookup(),
            MenuChoice::FirstWord => {
                let rendered = self.index.first_entry().map(WordEntry::render);
                self.print_entry(rendered)?;
                Ok(Flow::Continue)
            }
            MenuChoice::LastWord => {
                let rendered = self.index.last_entry().map(WordEntry::render);
                self.print_entry(rendered)?;
                Ok(Flow::Continue)
            }
            MenuChoice::PartsOfSpeech => self.parts_of_speech(),
            MenuChoice::UpdateDefinition => self.update_definition(),
            MenuChoice::RemoveDefinition => self.remove_definition(),
            MenuChoice::AddDefinition => self.add_definition(),
            MenuChoice::Save => self.save(),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn words_in_range(&mut self) -> io::Result<Flow> {
        let Some(start) = self.prompt("Starting word: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(end) = self.prompt("Ending word: ")? else {
            return Ok(Flow::Exit);
        };

        let mut out = format!("The words between {start} and {end} are:");
        for word in self.index.words_in_range(&start, &end) {
            out.push_str("\n\t");
            out.push_str(word);
        }
        writeln!(self.output, "\n{out}\n")?;
        Ok(Flow::Continue)
    }

    fn lookup(&mut self) -> io::Result<Flow> {
        let Some(word) = self.prompt("Select a word: ")? else {
            return Ok(Flow::Exit);
        };
        match self.index.lookup(&word) {
            Some(rendered) => writeln!(self.output, "\n{rendered}\n")?,
            None => writeln!(self.output, "\n{word} not found\n")?,
        }
        Ok(Flow::Continue)
    }

    fn print_entry(&mut self, rendered: Option<String>) -> io::Result<()> {
        match rendered {
            Some(rendered) => writeln!(self.output, "\n{rendered}\n"),
            None => writeln!(self.output, "\nThe dictionary is empty\n"),
        }
    }

    fn parts_of_speech(&mut self) -> io::Result<Flow> {
        let Some(word) = self.prompt("Select a word: ")? else {
            return Ok(Flow::Exit);
        };
        match self.index.parts_of_speech(&word) {
            Ok(summary) => writeln!(self.output, "\n{summary}\n")?,
            Err(e) if e.is_not_found() => {
                writeln!(self.output, "\nThe word entered is not in the dictionary\n")?;
            }
            Err(e) => writeln!(self.output, "\n{e}\n")?,
        }
        Ok(Flow::Continue)
    }

    fn update_definition(&mut self) -> io::Result<Flow> {
        let Some(word) = self.prompt_known_word()? else {
            return Ok(Flow::Continue);
        };
        let index = match self.select_definition(&word, "Select a definition to update: ")? {
            Some(Selection::Definition(index)) => index,
            Some(Selection::Back) => return Ok(Flow::Continue),
            None => return Ok(Flow::Exit),
        };
        let Some(text) = self.prompt("Type a new definition: ")? else {
            return Ok(Flow::Exit);
        };
        if validate_text(&text).is_err() {
            writeln!(self.output, "\nInvalid definition\n")?;
            return Ok(Flow::Continue);
        }

        match self.index.update_definition(&word, index, &text) {
            Ok(()) => writeln!(self.output, "\nDefinition Updated\n")?,
            Err(e) => writeln!(self.output, "\n{e}\n")?,
        }
        Ok(Flow::Continue)
    }

    fn remove_definition(&mut self) -> io::Result<Flow> {
        let Some(word) = self.prompt_known_word()? else {
            return Ok(Flow::Continue);
        };
        let index = match self.select_definition(&word, "Select a definition to remove: ")? {
            Some(Selection::Definition(index)) => index,
            Some(Selection::Back) => return Ok(Flow::Continue),
            None => return Ok(Flow::Exit),
        };

        match self.index.remove_definition(&word, index) {
            Ok(removal) => {
                writeln!(self.output, "Definition Removed")?;
                if removal.word_removed {
                    writeln!(self.output, "{word} had no definitions left and was removed")?;
                }
                writeln!(self.output)?;
            }
            Err(e) => writeln!(self.output, "\n{e}\n")?,
        }
        Ok(Flow::Continue)
    }

    fn add_definition(&mut self) -> io::Result<Flow> {
        let Some(word) = self.prompt("Type a word: ")? else {
            return Ok(Flow::Exit);
        };
        if validate_word(&word).is_err() {
            writeln!(self.output, "\nInvalid word\n")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "Valid parts of speech: {}", PartOfSpeech::tag_list())?;
        let part_of_speech = loop {
            let Some(tag) = self.prompt("Type a valid part of speech: ")? else {
                return Ok(Flow::Exit);
            };
            if let Ok(pos) = PartOfSpeech::parse(&tag) {
                break pos;
            }
        };

        let Some(text) = self.prompt("Type a definition: ")? else {
            return Ok(Flow::Exit);
        };
        if validate_text(&text).is_err() {
            writeln!(self.output, "\nInvalid definition\n")?;
            return Ok(Flow::Continue);
        }

        match self.index.add_definition(&word, Definition::new(part_of_speech, text)) {
            AddOutcome::NewWord | AddOutcome::Added => {
                writeln!(self.output, "\nSuccessfully added!\n")?;
            }
            AddOutcome::Duplicate => {
                writeln!(self.output, "\n{word} already has that definition\n")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn save(&mut self) -> io::Result<Flow> {
        let Some(path) = self.prompt("Type a filename with path: ")? else {
            return Ok(Flow::Exit);
        };
        match store::save_to_path(&self.index, Path::new(&path), &self.config) {
            Ok(()) => writeln!(self.output, "\nSuccessfully saved dictionary to {path}\n")?,
            Err(e) => writeln!(self.output, "\nCould not save dictionary: {e}\n")?,
        }
        Ok(Flow::Continue)
    }

    /// Prompts for a word and returns it only if it is in the dictionary.
    fn prompt_known_word(&mut self) -> io::Result<Option<String>> {
        let Some(word) = self.prompt("Select a word: ")? else {
            return Ok(None);
        };
        if !self.index.contains(&word) {
            writeln!(self.output, "Invalid selection\n")?;
            return Ok(None);
        }
        writeln!(self.output)?;
        Ok(Some(word))
    }

    /// Shows the numbered definitions of `word` until a valid number is
    /// entered. Returns `None` if input ends.
    fn select_definition(&mut self, word: &str, prompt: &str) -> io::Result<Option<Selection>> {
        let Some(entry) = self.index.get(word) else {
            return Ok(Some(Selection::Back));
        };
        let count = entry.definition_count();
        let listing = definition_listing(entry);

        loop {
            writeln!(self.output, "Definitions for {word}")?;
            writeln!(self.output, "{listing}")?;
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<usize>() {
                Ok(n) if (1..=count).contains(&n) => return Ok(Some(Selection::Definition(n - 1))),
                Ok(n) if n == count + 1 => {
                    writeln!(self.output)?;
                    return Ok(Some(Selection::Back));
                }
                _ => writeln!(self.output, "Invalid selection\n")?,
            }
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads one line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Numbered listing of a word's definitions followed by the
/// "Back to main menu" entry.
pub fn definition_listing(entry: &WordEntry) -> String {
    let mut out = String::new();
    for (n, def) in entry.numbered_definitions() {
        out.push_str(&format!("{n}. {}\n", def.render()));
    }
    out.push_str(&format!("{}. Back to main menu", entry.definition_count() + 1));
    out
}
