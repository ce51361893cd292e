use std::io::Write;

use anyhow::Result;
use artsearch_client::{Outcome, ReferenceLists, Session};
use artsearch_core::constants::ANY_FILTER;
use artsearch_core::{
    Direction, FilterSelection, RecordProjection, ReferenceKind, Settings, UserAction,
};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{build_client, lists};
use crate::render;

const HELP: &str = "\
commands:
  search [KEYWORD]         search with the current filters (keyword is cleared afterwards)
  classification NAME|any  set the classification filter
  century NAME|any         set the century filter
  all                      list objects without filters
  next | prev              page through results
  open N                   show the detail view of result N
  follow N                 search for linked fact N of the open detail view
  results                  show the current results again
  lists                    show classifications and centuries
  help                     show this help
  quit                     leave";

#[derive(Debug, Clone, PartialEq, Eq)]
enum BrowseCommand {
    Search(String),
    Filter(ReferenceKind, String),
    All,
    Page(Direction),
    Open(usize),
    Follow(usize),
    Results,
    Lists,
    Help,
    Quit,
    Nothing,
}

fn parse_index(arg: &str, command: &str) -> Result<usize, String> {
    arg.parse().map_err(|_| format!("usage: {command} N"))
}

fn parse_command(line: &str) -> Result<BrowseCommand, String> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    match word {
        "" => Ok(BrowseCommand::Nothing),
        "search" | "s" => Ok(BrowseCommand::Search(rest.to_owned())),
        "classification" | "century" if rest.is_empty() => Err(format!("usage: {word} NAME|any")),
        "classification" => Ok(BrowseCommand::Filter(ReferenceKind::Classifications, rest.to_owned())),
        "century" => Ok(BrowseCommand::Filter(ReferenceKind::Centuries, rest.to_owned())),
        "all" => Ok(BrowseCommand::All),
        "next" | "n" => Ok(BrowseCommand::Page(Direction::Next)),
        "prev" | "p" => Ok(BrowseCommand::Page(Direction::Previous)),
        "open" | "o" => parse_index(rest, "open").map(BrowseCommand::Open),
        "follow" | "f" => parse_index(rest, "follow").map(BrowseCommand::Follow),
        "results" | "r" => Ok(BrowseCommand::Results),
        "lists" => Ok(BrowseCommand::Lists),
        "help" | "?" => Ok(BrowseCommand::Help),
        "quit" | "exit" | "q" => Ok(BrowseCommand::Quit),
        other => Err(format!("unknown command: {other} (try `help`)")),
    }
}

/// Whether `name` is a known entry of the loaded list. Unknown when the list
/// failed to load.
fn is_known(lists: &ReferenceLists, kind: ReferenceKind, name: &str) -> bool {
    name == ANY_FILTER
        || lists.get(kind).is_none_or(|list| list.iter().any(|entry| entry.name == name))
}

fn set_filter(form: &mut FilterSelection, kind: ReferenceKind, value: String) {
    match kind {
        ReferenceKind::Classifications => form.classification = value,
        ReferenceKind::Centuries => form.century = value,
    }
}

fn report(outcome: Outcome, session: &Session, detail: &mut Option<Box<RecordProjection>>) {
    match outcome {
        Outcome::Updated => print!("{}", render::previews(session.state())),
        Outcome::Detail(projection) => {
            print!("{}", render::detail(&projection));
            *detail = Some(projection);
        },
        Outcome::Unchanged => println!("nothing to do"),
        Outcome::FetchFailed => println!("request failed"),
    }
}

fn prompt() {
    let mut stdout = std::io::stdout();
    let _ = write!(stdout, "> ");
    let _ = stdout.flush();
}

pub(crate) async fn run_browse(settings: &Settings) -> Result<()> {
    let client = build_client(settings, true)?;
    let lists = lists::load_lists(settings, &client).await;
    for kind in ReferenceKind::ALL {
        match lists.get(kind) {
            Some(list) => println!("{kind} ({})", list.len()),
            None => println!("{kind}: unavailable"),
        }
    }
    println!("{HELP}");

    let mut session = Session::new(client);
    let mut form = FilterSelection::default();
    let mut detail: Option<Box<RecordProjection>> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt();
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            },
        };

        let action = match command {
            BrowseCommand::Nothing => continue,
            BrowseCommand::Quit => break,
            BrowseCommand::Help => {
                println!("{HELP}");
                continue;
            },
            BrowseCommand::Lists => {
                print!("{}", render::reference_lists(&lists));
                continue;
            },
            BrowseCommand::Results => {
                print!("{}", render::previews(session.state()));
                continue;
            },
            BrowseCommand::Filter(kind, value) => {
                if !is_known(&lists, kind, &value) {
                    println!("warning: {value:?} is not in the {kind} list");
                }
                set_filter(&mut form, kind, value);
                continue;
            },
            BrowseCommand::Search(keyword) => {
                form.keyword = keyword;
                let action = UserAction::Submit(form.clone());
                form.keyword.clear();
                action
            },
            BrowseCommand::All => UserAction::LoadInitial,
            BrowseCommand::Page(direction) => UserAction::Page(direction),
            BrowseCommand::Open(index) => UserAction::OpenRecord(index),
            BrowseCommand::Follow(index) => {
                match detail.as_ref().and_then(|projection| projection.links().nth(index)) {
                    Some(link) => UserAction::FollowFact(link.clone()),
                    None => {
                        println!("no linked fact {index}; open a record first");
                        continue;
                    },
                }
            },
        };

        let outcome = session.dispatch(&action).await;
        report(outcome, &session, &mut detail);
    }

    Ok(())
}
