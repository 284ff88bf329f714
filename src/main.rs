use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::mpsc;

use drivesmart_academy::app_state::AppState;
use drivesmart_academy::config::Config;
use drivesmart_academy::errors::AppResult;
use drivesmart_academy::models::dto::SessionView;
use drivesmart_academy::services::SessionService;
use drivesmart_academy::session::TimerEvent;

#[tokio::main]
async fn main() -> AppResult<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let low_time_warning = config.low_time_warning_seconds;
    let state = AppState::new(config)?;

    println!("DriveSmart Academy — practice quizzes");

    let mut service = SessionService::new(state.catalog.clone(), state.sink.clone());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let quizzes = state.catalog.list_quizzes().await?;
        println!();
        println!("Available quizzes:");
        for (index, quiz) in quizzes.iter().enumerate() {
            println!(
                "  {}. {} [{}] — {} questions, {}",
                index + 1,
                quiz.title,
                quiz.category,
                quiz.question_count(),
                match quiz.time_limit_seconds {
                    Some(limit) => format!("{} limit", format_clock(limit)),
                    None => "untimed".to_string(),
                }
            );
        }
        prompt("Pick a quiz (q to quit): ");

        let Ok(Some(line)) = lines.next_line().await else {
            break;
        };
        let input = line.trim();
        if input == "q" {
            break;
        }
        let Some(quiz) = input
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| quizzes.get(index))
        else {
            println!("  pick a listed number or q");
            continue;
        };

        if let Err(err) = service.start(&quiz.id).await {
            println!("  could not start quiz: {}", err);
            continue;
        }
        run_session(&mut service, &mut lines, low_time_warning).await?;
    }

    println!("Goodbye!");
    Ok(())
}

/// Drives one started session until the user leaves it: answers and
/// navigation from stdin, ticks and expiry from the session's countdown.
async fn run_session(
    service: &mut SessionService,
    lines: &mut Lines<BufReader<Stdin>>,
    low_time_warning: u32,
) -> AppResult<()> {
    let mut timer_events = service.take_timer_events();
    render(service, low_time_warning);

    loop {
        tokio::select! {
            event = next_timer_event(&mut timer_events) => match event {
                Some(TimerEvent::Tick { remaining_seconds }) => {
                    service.on_tick(remaining_seconds);
                    print_countdown(remaining_seconds, low_time_warning);
                }
                Some(TimerEvent::Expired) => {
                    service.on_timer_expired()?;
                    println!();
                    println!("Time is up!");
                    render(service, low_time_warning);
                }
                None => timer_events = None,
            },
            line = lines.next_line() => {
                let Ok(Some(line)) = line else {
                    service.reset();
                    return Ok(());
                };
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }

                let completed = service
                    .view()
                    .map(|view| view.completed)
                    .unwrap_or(false);
                if completed {
                    match input {
                        "r" => {
                            service.retake()?;
                            timer_events = service.take_timer_events();
                            render(service, low_time_warning);
                        }
                        "b" => {
                            service.reset();
                            return Ok(());
                        }
                        _ => println!("  r to retake, b to go back"),
                    }
                    continue;
                }

                match input {
                    "n" => match service.advance() {
                        Ok(()) => render(service, low_time_warning),
                        Err(err) => println!("  {}", err),
                    },
                    "b" => match service.retreat() {
                        Ok(()) => render(service, low_time_warning),
                        Err(err) => println!("  {}", err),
                    },
                    "x" => {
                        service.reset();
                        return Ok(());
                    }
                    _ => match input.parse::<usize>() {
                        Ok(choice) if choice >= 1 => {
                            match service.select_answer(choice - 1) {
                                Ok(()) => render(service, low_time_warning),
                                Err(err) => println!("  {}", err),
                            }
                        }
                        _ => println!("  answer with an option number, n, b or x"),
                    },
                }
            }
        }
    }
}

async fn next_timer_event(
    events: &mut Option<mpsc::UnboundedReceiver<TimerEvent>>,
) -> Option<TimerEvent> {
    match events {
        Some(receiver) => receiver.recv().await,
        None => std::future::pending().await,
    }
}

fn render(service: &SessionService, low_time_warning: u32) {
    let Some(view) = service.view() else {
        return;
    };
    if view.completed {
        render_results(&view);
    } else {
        render_question(&view, low_time_warning);
    }
}

fn render_question(view: &SessionView, low_time_warning: u32) {
    println!();
    println!(
        "{} — question {}/{}",
        view.quiz_title,
        view.question_index + 1,
        view.question_count
    );
    if let Some(remaining) = view.remaining_seconds {
        print_countdown(remaining, low_time_warning);
    }
    if let Some(image) = &view.question.image {
        println!("  [image: {}]", image);
    }
    println!("  {}", view.question.prompt);
    for (index, option) in view.question.options.iter().enumerate() {
        let marker = if view.question.selected_option == Some(index) {
            ">"
        } else {
            " "
        };
        println!("  {} {}. {}", marker, index + 1, option);
    }
    println!(
        "  (1-{} answer, n next, b back, x exit)",
        view.question.options.len()
    );
}

fn render_results(view: &SessionView) {
    let Some(result) = &view.result else {
        return;
    };
    println!();
    println!("Results — {}", view.quiz_title);
    println!(
        "  {}/{} correct ({}%)",
        result.correct_count, result.total_questions, result.score_percentage
    );
    println!("  {}", if result.passed { "Passed" } else { "Failed" });
    if let Some(spent) = result.time_spent_seconds {
        println!("  time spent: {}s", spent);
    }
    println!("  (r retake, b back to quizzes)");
}

fn print_countdown(remaining: u32, low_time_warning: u32) {
    let marker = if remaining < low_time_warning { " !" } else { "" };
    println!("  time left: {}{}", format_clock(remaining), marker);
}

fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

fn prompt(text: &str) {
    print!("{}", text);
    let _ = std::io::stdout().flush();
}
