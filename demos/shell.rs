//! A terminal front end for the animated tree.
//!
//! Reads one command per line from stdin (`insert 4`, `find 7`, `delete 2`, `delay 100`,
//! `clear`, `show`) and prints each visited node as the walk reaches it, then redraws the tree.
//!
//! ```text
//! cargo run --example shell -- --delay 400
//! cargo run --example shell -- --empty
//! ```

use std::io::{self, BufRead, Write};
use std::time::Duration;

use animated_bst::{parse_delay, Key, Node, Outcome, Pacing, Session, TraversalObserver};

/// Prints a line per visit, indented by how far down the walk is.
#[derive(Default)]
struct Trail {
    steps: usize,
}

impl TraversalObserver<Key> for Trail {
    fn on_visit(&mut self, node: &Node<Key>) {
        let child = |child: Option<&Node<Key>>| child.map_or("-".to_string(), |n| n.key().to_string());
        println!(
            "{:indent$}-> [{}]  (left {}, right {})",
            "",
            node.key(),
            child(node.left()),
            child(node.right()),
            indent = self.steps * 2
        );
        // Flush so each step shows up while the walk is paused on it.
        if let Err(e) = io::stdout().flush() {
            eprintln!("Error flushing output: {}", e);
        }
    }

    fn on_unvisit(&mut self, _node: &Node<Key>) {
        self.steps += 1;
    }
}

/// Draws the tree on its side: the root on the left, right subtrees above left ones.
fn draw(node: Option<&Node<Key>>, depth: usize, out: &mut String) {
    if let Some(node) = node {
        draw(node.right(), depth + 1, out);
        out.push_str(&format!("{:indent$}{}\n", "", node.key(), indent = depth * 4));
        draw(node.left(), depth + 1, out);
    }
}

fn describe(outcome: Outcome) -> String {
    match outcome {
        Outcome::Inserted(true) => "inserted".to_string(),
        Outcome::Inserted(false) => "already there".to_string(),
        Outcome::Deleted(true) => "deleted".to_string(),
        Outcome::Deleted(false) => "not there".to_string(),
        Outcome::Found(true) => "found".to_string(),
        Outcome::Found(false) => "not found".to_string(),
        Outcome::Cleared => "cleared".to_string(),
        Outcome::DelaySet(delay) => format!("delay is now {:?}", delay),
        Outcome::Shown => String::new(),
    }
}

struct Args {
    delay: Duration,
    seed: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        delay: Pacing::DEFAULT_DELAY,
        seed: true,
    };
    let mut argv = std::env::args().skip(1);
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--delay" => {
                let value = argv.next().ok_or("--delay needs a value in milliseconds")?;
                args.delay = parse_delay(&value).map_err(|e| e.to_string())?;
            }
            "--empty" => args.seed = false,
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }
    Ok(args)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("usage: shell [--delay <ms>] [--empty]");
            std::process::exit(2);
        }
    };

    let pacing = Pacing::new(args.delay);
    let mut session = if args.seed {
        Session::seeded(pacing, &mut ()).await
    } else {
        Session::new(pacing)
    };

    let mut picture = String::new();
    draw(session.tree().root(), 0, &mut picture);
    print!("{}", picture);

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let mut trail = Trail::default();
        match session.run_line(&line, &mut trail).await {
            Ok(outcome) => {
                let summary = describe(outcome);
                if !summary.is_empty() {
                    println!("{}", summary);
                }
                picture.clear();
                draw(session.tree().root(), 0, &mut picture);
                print!("{}", picture);
            }
            Err(e) => eprintln!("{}", e),
        }
    }
}
