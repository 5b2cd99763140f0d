//! The interactive front end. Everything here is I/O around the tree: reading
//! lines, parsing them into commands and printing what the tree reports.

pub mod args;
pub mod command;
pub mod error;
pub mod output;

use std::io::{self, Write};
use std::path::PathBuf;

use bst_explorer::BinaryTree;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, info, warn};

use command::{execute, Flow, Line};
use error::ShellResult;

const HEADER: &str = "=== Binary Search Tree Explorer ===
Commands:
  insert <value>...   insert values into the tree
  props               height, degree, order and nodes per level
  show                draw the tree
  traverse            preorder, inorder and postorder traversals
  search <value>      search with every strategy and compare them
  exit                leave (also: quit, Ctrl-D)";
const PROMPT: &str = "bst> ";

pub struct Shell {
    editor: DefaultEditor,
    tree: BinaryTree,
    history: Option<PathBuf>,
}

impl Shell {
    pub fn new(tree: BinaryTree, history: Option<PathBuf>) -> ShellResult<Self> {
        let mut editor = DefaultEditor::new()?;
        if let Some(path) = &history {
            if let Err(e) = editor.load_history(path) {
                debug!(path = %path.display(), error = %e, "no history loaded");
            }
        }

        Ok(Self {
            editor,
            tree,
            history,
        })
    }

    pub fn repl(&mut self) -> ShellResult<()> {
        let stdout = io::stdout();
        println!("{HEADER}");
        info!(nodes = self.tree.node_count(), "shell started");

        loop {
            let line = match self.editor.readline(PROMPT) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(e) => return Err(e.into()),
            };
            if line.trim().is_empty() {
                continue;
            }
            if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                warn!(error = %e, "failed to add line to history");
            }

            let mut out = stdout.lock();
            match Line::read(&line) {
                Ok(command) => {
                    writeln!(out)?;
                    if execute(&command, &mut self.tree, &mut out)? == Flow::Exit {
                        break;
                    }
                }
                Err(err) => write!(out, "{err}")?,
            }
            out.flush()?;
        }

        self.save_history();
        println!("Goodbye!");
        info!("shell stopped");
        Ok(())
    }

    fn save_history(&mut self) {
        if let Some(path) = &self.history {
            if let Err(e) = self.editor.save_history(path) {
                warn!(path = %path.display(), error = %e, "failed to save history");
            }
        }
    }
}
