//! Stdin command loop for the terminal host.

use std::io::{self, BufRead, Write};

use concierge_client::DriverHandle;

use crate::page::TerminalPage;

pub fn run(handle: &DriverHandle, page: &TerminalPage, base_url: &str) {
    println!("concierge console — backend {base_url}");
    println!("type a query; /open N opens a result, /restart restarts the service, /quit exits");

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();

        if input == "/quit" {
            break;
        }
        if input == "/restart" {
            if confirm("Restart the assistant service? This clears its memory") {
                handle.confirm_restart();
            }
            continue;
        }
        if let Some(index) = input.strip_prefix("/open ") {
            match index
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(|i| page.action(i))
            {
                Some(action) => handle.open(&action.id, action.provider),
                None => println!("no such result action"),
            }
            continue;
        }

        handle.submit(input);
    }
}

fn confirm(prompt: &str) -> bool {
    print!("{prompt} [y/N]: ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes")
}
