//! Terminal walkthrough of the wizard leave guard.
//!
//! Drives the individual offer wizard through the two situations the guard
//! exists for: an unsaved form held for confirmation, and a finished wizard
//! redirecting backwards motion out to the offers list.
//!
//! Run with logging to watch the guard pipeline:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example confirm_flow
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use wizard_guard::{FlowConfig, GuardedNavigator, NavigationOutcome, WizardLeaveGuard};

fn main() {
    env_logger::init();

    unsaved_form_walkthrough();
    finished_wizard_walkthrough();
}

/// Act one: a dirty stock form holds navigation until the user decides.
fn unsaved_form_walkthrough() {
    let dirty = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&dirty);

    let mut navigator = GuardedNavigator::new().with_guard(
        WizardLeaveGuard::new(FlowConfig::individual())
            .activated_when(move || flag.load(Ordering::Relaxed)),
    );

    println!("== Creating an individual offer ==");
    visit(&mut navigator, "/offres");
    visit(&mut navigator, "/offre/AB12/individuel/creation");
    visit(&mut navigator, "/offre/AB12/individuel/creation/stocks");

    println!("   (the user edits the stock form)");
    dirty.store(true, Ordering::Relaxed);

    println!("\n== Clicking back to the offer page ==");
    let outcome = navigator.push("/offre/AB12/individuel/creation");
    report(&outcome);

    if outcome.is_blocked() {
        println!("   dialog: \"Your stock edits are not saved. Leave anyway?\"");
        println!("   the user clicks 'Stay'");
        navigator.dismiss();
        println!("   still on {}", navigator.current_path());
    }

    println!("\n== Clicking back again, this time leaving ==");
    let outcome = navigator.push("/offre/AB12/individuel/creation");
    report(&outcome);

    if outcome.is_blocked() {
        println!("   dialog: \"Your stock edits are not saved. Leave anyway?\"");
        println!("   the user clicks 'Leave'");
        if let Some(change) = navigator.confirm() {
            println!("   landed on {}", change.to);
        }
    }

    println!("\n== Done: {} ==\n", navigator.current_path());
}

/// Act two: once the summary page is reached, backwards motion exits the
/// wizard instead of re-opening completed steps.
fn finished_wizard_walkthrough() {
    let mut navigator = GuardedNavigator::new()
        .with_guard(WizardLeaveGuard::new(FlowConfig::individual()));

    println!("== Reviewing a finished offer ==");
    visit(&mut navigator, "/offre/AB12/individuel/creation/stocks");
    visit(&mut navigator, "/offre/AB12/individuel/creation/recapitulatif");

    println!("\n== Pressing the browser back button ==");
    if let Some(outcome) = navigator.back() {
        report(&outcome);
    }

    println!("\n== Done: {} ==", navigator.current_path());
}

fn visit(navigator: &mut GuardedNavigator, path: &str) {
    let outcome = navigator.push(path);
    report(&outcome);
}

fn report(outcome: &NavigationOutcome) {
    match outcome {
        NavigationOutcome::Completed { change } => println!("-> now on {}", change.to),
        NavigationOutcome::Redirected { requested, change } => {
            println!("-> asked for {requested}, redirected to {}", change.to);
        }
        NavigationOutcome::Blocked { requested, .. } => {
            println!("-> navigation to {requested} held for confirmation");
        }
        NavigationOutcome::Failed(error) => println!("-> navigation failed: {error}"),
    }
}
