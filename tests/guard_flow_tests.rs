//! End-to-end tests for the guarded navigator: blocking, the
//! confirm/dismiss protocol, redirects, and guard composition.
//!
//! The wizard guard is armed by a dirty flag the way a host form arms it:
//! clean while entering the wizard, dirty once the user edits something.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use wizard_guard::{
    guard_fn, FlowConfig, FlowKind, GuardDecision, GuardedNavigator, NavigationKind,
    NavigationOutcome, WizardLeaveGuard,
};

/// A navigator protecting the given wizard, armed by a shared dirty flag.
fn dirty_navigator(kind: FlowKind, dirty: &Arc<AtomicBool>) -> GuardedNavigator {
    let flag = Arc::clone(dirty);
    let flow = match kind {
        FlowKind::Individual => FlowConfig::individual(),
        FlowKind::Collective => FlowConfig::collective(),
    };
    GuardedNavigator::new().with_guard(
        WizardLeaveGuard::new(flow).activated_when(move || flag.load(Ordering::Relaxed)),
    )
}

// ---- the wizard leave scenario ----

#[test]
fn test_block_then_confirm_exits_to_offers() {
    let dirty = Arc::new(AtomicBool::new(false));
    let mut navigator = dirty_navigator(FlowKind::Individual, &dirty);

    navigator.push("/offres");
    navigator.push("/offre/AB12/individuel/creation/stocks");
    dirty.store(true, Ordering::Relaxed);

    // Stepping back into the offer form would lose the stock edits.
    let outcome = navigator.push("/offre/AB12/individuel/creation");
    assert!(outcome.is_blocked());
    assert_eq!(outcome.redirect_path(), Some("/offres"));
    assert_eq!(
        navigator.current_path(),
        "/offre/AB12/individuel/creation/stocks"
    );

    // The user confirms leaving: the redirect wins over the requested page.
    let change = navigator.confirm().unwrap();
    assert_eq!(change.to, "/offres");
    assert_eq!(navigator.current_path(), "/offres");
    assert!(!navigator.has_pending());
}

#[test]
fn test_block_then_dismiss_stays_put() {
    let dirty = Arc::new(AtomicBool::new(false));
    let mut navigator = dirty_navigator(FlowKind::Individual, &dirty);

    navigator.push("/offre/AB12/individuel/creation/stocks");
    dirty.store(true, Ordering::Relaxed);
    navigator.push("/offre/AB12/individuel/creation");

    let dismissed = navigator.dismiss().unwrap();
    assert_eq!(dismissed.requested.to, "/offre/AB12/individuel/creation");
    assert_eq!(
        navigator.current_path(),
        "/offre/AB12/individuel/creation/stocks"
    );

    // Nothing left to confirm afterwards.
    assert!(navigator.confirm().is_none());
}

#[test]
fn test_clean_form_navigates_freely() {
    let dirty = Arc::new(AtomicBool::new(false));
    let mut navigator = dirty_navigator(FlowKind::Individual, &dirty);

    navigator.push("/offre/AB12/individuel/creation/stocks");
    let outcome = navigator.push("/offre/AB12/individuel/creation");
    assert!(outcome.is_completed());
    assert_eq!(navigator.current_path(), "/offre/AB12/individuel/creation");
}

#[test]
fn test_dirty_flag_toggles_mid_session() {
    let dirty = Arc::new(AtomicBool::new(false));
    let mut navigator = dirty_navigator(FlowKind::Individual, &dirty);

    navigator.push("/offre/AB12/individuel/creation/stocks");
    dirty.store(true, Ordering::Relaxed);
    assert!(navigator.push("/offre/AB12/individuel/creation").is_blocked());
    navigator.dismiss();

    // The host saved the form; the same navigation now goes through.
    dirty.store(false, Ordering::Relaxed);
    let outcome = navigator.push("/offre/AB12/individuel/creation");
    assert!(outcome.is_completed());
}

#[test]
fn test_forward_steps_never_interrupted() {
    let dirty = Arc::new(AtomicBool::new(false));
    let mut navigator = dirty_navigator(FlowKind::Individual, &dirty);

    navigator.push("/offre/AB12/individuel/creation");
    dirty.store(true, Ordering::Relaxed);

    let steps = [
        "/offre/AB12/individuel/creation/stocks",
        "/offre/AB12/individuel/creation/recapitulatif",
        "/offre/AB12/individuel/creation/confirmation",
    ];
    for step in steps {
        assert!(navigator.push(step).is_completed(), "for {step}");
    }

    // Leaving from the confirmation page needs no confirmation.
    assert!(navigator.push("/offres").is_completed());
}

// ---- collective flow ----

#[test]
fn test_collective_flow_with_visibility_step() {
    let dirty = Arc::new(AtomicBool::new(false));
    let mut navigator = dirty_navigator(FlowKind::Collective, &dirty);

    navigator.push("/offre/creation/collectif");
    dirty.store(true, Ordering::Relaxed);

    assert!(navigator.push("/offre/T-AB12/collectif/stocks").is_completed());
    assert!(navigator
        .push("/offre/T-AB12/collectif/visibilite")
        .is_completed());
    assert!(navigator
        .push("/offre/T-AB12/collectif/recapitulatif")
        .is_completed());

    // Backing into the visibility step after the summary exits the wizard.
    let outcome = navigator.back().unwrap();
    assert!(outcome.is_redirected());
    assert_eq!(navigator.current_path(), "/offres");
}

// ---- history operations through guards ----

#[test]
fn test_browser_back_is_guarded() {
    let dirty = Arc::new(AtomicBool::new(false));
    let mut navigator = dirty_navigator(FlowKind::Individual, &dirty);

    navigator.push("/offre/AB12/individuel/creation");
    navigator.push("/offre/AB12/individuel/creation/stocks");
    dirty.store(true, Ordering::Relaxed);

    // Back targets the offer form page: blocked like any navigation.
    let outcome = navigator.back().unwrap();
    assert!(outcome.is_blocked());
    assert_eq!(
        navigator.current_path(),
        "/offre/AB12/individuel/creation/stocks"
    );

    // Confirming applies the redirect as a new entry.
    let change = navigator.confirm().unwrap();
    assert_eq!(change.to, "/offres");
    assert_eq!(change.kind, NavigationKind::Push);
}

#[test]
fn test_replace_is_guarded() {
    let dirty = Arc::new(AtomicBool::new(false));
    let mut navigator = dirty_navigator(FlowKind::Individual, &dirty);

    navigator.push("/offre/AB12/individuel/creation/stocks");
    dirty.store(true, Ordering::Relaxed);

    let outcome = navigator.replace("/accueil");
    assert!(outcome.is_blocked());

    // Confirming a blocked replace swaps the current entry.
    let change = navigator.confirm().unwrap();
    assert_eq!(change.kind, NavigationKind::Replace);
    assert_eq!(navigator.current_path(), "/accueil");
    assert!(!navigator.can_go_forward());
}

#[test]
fn test_new_attempt_drops_previous_pending() {
    let dirty = Arc::new(AtomicBool::new(false));
    let mut navigator = dirty_navigator(FlowKind::Individual, &dirty);

    navigator.push("/offre/AB12/individuel/creation/stocks");
    dirty.store(true, Ordering::Relaxed);

    navigator.push("/offre/AB12/individuel/creation");
    navigator.push("/accueil");

    // Only the second attempt is held; confirming applies it.
    assert_eq!(navigator.pending().unwrap().requested.to, "/accueil");
    let change = navigator.confirm().unwrap();
    assert_eq!(change.to, "/accueil");
}

// ---- guard composition ----

#[test]
fn test_wizard_guard_composes_with_custom_guards() {
    let dirty = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&dirty);

    let mut navigator = GuardedNavigator::new()
        .with_guard(
            WizardLeaveGuard::new(FlowConfig::individual())
                .activated_when(move || flag.load(Ordering::Relaxed)),
        )
        .with_guard(guard_fn(|request| {
            if request.to.starts_with("/admin") {
                GuardDecision::block()
            } else {
                GuardDecision::allow()
            }
        }));

    // The custom guard holds admin pages even with a clean form.
    assert!(navigator.push("/admin/settings").is_blocked());
    navigator.dismiss();

    // The wizard guard holds wizard exits once the form is dirty.
    navigator.push("/offre/AB12/individuel/creation/stocks");
    dirty.store(true, Ordering::Relaxed);
    assert!(navigator.push("/offre/AB12/individuel/creation").is_blocked());
}

#[test]
fn test_redirect_loop_between_guards_fails() {
    let mut navigator =
        GuardedNavigator::new().with_guard(guard_fn(|request| match request.to.as_str() {
            "/ping" => GuardDecision::allow_redirect("/pong"),
            "/pong" => GuardDecision::allow_redirect("/ping"),
            _ => GuardDecision::allow(),
        }));

    let outcome = navigator.push("/ping");
    assert!(outcome.is_failed());
    assert_eq!(navigator.current_path(), "/");

    match outcome {
        NavigationOutcome::Failed(error) => {
            assert!(error.to_string().contains("Redirect loop"));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn test_finite_redirect_chain_still_lands() {
    let mut navigator =
        GuardedNavigator::new().with_guard(guard_fn(|request| match request.to.as_str() {
            "/step1" => GuardDecision::allow_redirect("/step2"),
            "/step2" => GuardDecision::allow_redirect("/step3"),
            _ => GuardDecision::allow(),
        }));

    let outcome = navigator.push("/step1");
    assert!(outcome.is_redirected());
    assert_eq!(outcome.path(), Some("/step3"));
    assert_eq!(navigator.current_path(), "/step3");
}
