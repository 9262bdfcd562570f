//! Scenario catalog. Each scenario drives `learnix-core` the way a visitor
//! would and fails with a readable message on the first broken expectation.

use anyhow::{Context, Result, bail, ensure};
use learnix_core::{
    AccordionGroup, CategoryTabs, ContactForm, ContactMethod, Effect, FieldName, HeaderStyle,
    MemoryStore, MenuEvent, MobileMenu, Notice, OutboundAction, Severity, SiteConfig, SubmissionFlow,
    SubmissionState, Theme, ThemeController, ToastStack, ToastStyle, ToastTimeline, anchor_target,
    newsletter_signup, parallax_offset, scroll_top_visible, validate_form,
};

pub struct ScenarioCtx {
    pub config: SiteConfig,
    pub verbose: bool,
}

impl ScenarioCtx {
    fn note(&self, message: &str) {
        if self.verbose {
            println!("     · {message}");
        }
        log::debug!("{message}");
    }
}

pub struct Scenario {
    pub key: &'static str,
    pub description: &'static str,
    pub run: fn(&ScenarioCtx) -> Result<()>,
}

const CATALOG: &[Scenario] = &[
    Scenario {
        key: "form-validation",
        description: "Field rules, required set and document order of errors",
        run: form_validation,
    },
    Scenario {
        key: "submission-flow",
        description: "Consent gate, loading state and reset after a send",
        run: submission_flow,
    },
    Scenario {
        key: "theme-preference",
        description: "Resolution order, toggling and persistence of the theme",
        run: theme_preference,
    },
    Scenario {
        key: "faq-accordion",
        description: "Single-open FAQ panels and category tabs",
        run: faq_accordion,
    },
    Scenario {
        key: "mobile-menu",
        description: "Every way the mobile overlay opens and closes",
        run: mobile_menu,
    },
    Scenario {
        key: "toast-lifecycle",
        description: "Toast phases, timings and dismissal",
        run: toast_lifecycle,
    },
    Scenario {
        key: "contact-actions",
        description: "Outbound contact links and newsletter sign-up",
        run: contact_actions,
    },
    Scenario {
        key: "scroll-effects",
        description: "Header threshold, parallax, scroll-to-top and anchor offsets",
        run: scroll_effects,
    },
];

pub fn list_scenarios() -> impl Iterator<Item = (&'static str, &'static str)> {
    CATALOG.iter().map(|s| (s.key, s.description))
}

pub fn get_scenario(key: &str) -> Option<&'static Scenario> {
    CATALOG.iter().find(|s| s.key == key)
}

/// Split a comma-separated list, expanding `all` to the whole catalog.
pub fn expand_scenarios(arg: &str) -> Vec<String> {
    let mut keys: Vec<String> = arg
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if keys.iter().any(|k| k == "all") {
        keys.retain(|k| k != "all");
        for (key, _) in list_scenarios() {
            if !keys.iter().any(|k| k == key) {
                keys.push(key.to_string());
            }
        }
    }
    keys
}

fn complete_form() -> ContactForm {
    ContactForm {
        first_name: "Asha".to_string(),
        last_name: "Verma".to_string(),
        email: "asha@example.com".to_string(),
        phone: String::new(),
        subject: "billing".to_string(),
        message: "I need help with my account.".to_string(),
        terms: true,
    }
}

fn form_validation(ctx: &ScenarioCtx) -> Result<()> {
    ensure!(validate_form(&complete_form()).is_valid(), "complete form rejected");

    let empty = validate_form(&ContactForm::default());
    let flagged: Vec<FieldName> = empty.errors().iter().map(|e| e.field()).collect();
    ensure!(
        flagged == FieldName::REQUIRED,
        "empty form flagged {flagged:?}, expected every required field in order"
    );
    ctx.note(&format!("empty form raises {} errors", flagged.len()));

    let mut form = complete_form();
    form.phone = "12345".to_string();
    ensure!(
        validate_form(&form).error_for(FieldName::Phone).is_some(),
        "short phone accepted"
    );
    form.phone = "+91 (931) 108-8577".to_string();
    ensure!(validate_form(&form).is_valid(), "formatted phone rejected");

    form.first_name = "R2D2".to_string();
    ensure!(
        validate_form(&form).error_for(FieldName::FirstName).is_some(),
        "name with digits accepted"
    );
    form = complete_form();
    form.message = "too short".to_string();
    ensure!(
        validate_form(&form).error_for(FieldName::Message).is_some(),
        "nine-character message accepted"
    );
    Ok(())
}

fn submission_flow(ctx: &ScenarioCtx) -> Result<()> {
    let mut flow = SubmissionFlow::new(&ctx.config);
    ensure!(!flow.submit_enabled(false), "submit enabled without consent");
    ensure!(flow.submit_enabled(true), "submit disabled with consent");

    let rejected = flow.submit(&ContactForm::default());
    ensure!(flow.state() == SubmissionState::Rejected, "empty form not rejected");
    ensure!(
        rejected.last() == Some(&Effect::FocusField(FieldName::FirstName)),
        "rejection does not focus the first invalid field"
    );

    let sent = flow.submit(&complete_form());
    ensure!(flow.state() == SubmissionState::Submitting, "valid form not submitting");
    ensure!(
        sent.contains(&Effect::StartTimer {
            delay_ms: ctx.config.timing.submit_delay_ms
        }),
        "no send timer scheduled"
    );
    ensure!(!flow.submit_enabled(true), "submit enabled while sending");
    ensure!(
        flow.submit(&complete_form()).is_empty(),
        "second submit during a send was not ignored"
    );

    let settled = flow.settle();
    let notices = settled
        .iter()
        .filter(|e| matches!(e, Effect::Notify(n) if n.severity == Severity::Success))
        .count();
    ensure!(notices == 1, "expected one success toast, saw {notices}");
    ensure!(settled.contains(&Effect::ResetFields), "form not reset");
    ensure!(settled.contains(&Effect::RestoreSubmit), "submit control not restored");
    ensure!(flow.settle().is_empty(), "settle fired twice");
    ctx.note("send settled with a single success toast");
    Ok(())
}

fn theme_preference(ctx: &ScenarioCtx) -> Result<()> {
    let key = ctx.config.storage_key.as_str();
    let fallback = ctx.config.default_theme;

    let mut theme = ThemeController::new(MemoryStore::new(), key, None, fallback);
    ensure!(theme.current() == fallback, "fallback theme not used");
    ensure!(theme.stored().is_none(), "theme persisted before any choice");
    theme.toggle();
    theme.toggle();
    ensure!(theme.current() == fallback, "two toggles did not return to the start");
    ensure!(
        theme.store().get(key) == Some(fallback.as_str()),
        "toggle did not persist"
    );

    let system = ThemeController::new(MemoryStore::new(), key, Some(Theme::Light), Theme::Dark);
    ensure!(system.current() == Theme::Light, "system preference ignored");

    let stored = MemoryStore::new().with_entry(key, "light");
    let mut chosen = ThemeController::new(stored, key, Some(Theme::Dark), Theme::Dark);
    ensure!(chosen.current() == Theme::Light, "stored choice did not win");
    ensure!(
        chosen.apply_system_change(true).is_none(),
        "system change overrode an explicit choice"
    );

    let junk = MemoryStore::new().with_entry(key, "sepia");
    let recovered = ThemeController::new(junk, key, None, Theme::Dark);
    ensure!(recovered.current() == Theme::Dark, "invalid stored value not ignored");
    Ok(())
}

fn faq_accordion(_ctx: &ScenarioCtx) -> Result<()> {
    let mut group = AccordionGroup::new(3);
    group.toggle(0)?;
    group.toggle(2)?;
    ensure!(group.states() == [false, false, true], "more than one panel open");
    group.toggle(2)?;
    ensure!(group.open_panel().is_none(), "re-clicking did not close the panel");
    if group.toggle(3).is_ok() {
        bail!("out-of-range panel accepted");
    }

    let mut tabs = CategoryTabs::new(["general", "billing"]);
    ensure!(tabs.shows("billing"), "category hidden before any selection");
    tabs.select("general").context("selecting a known tab")?;
    ensure!(
        tabs.shows("general") && !tabs.shows("billing"),
        "tab selection did not filter categories"
    );
    ensure!(tabs.select("refunds").is_err(), "unknown tab accepted");
    Ok(())
}

fn mobile_menu(ctx: &ScenarioCtx) -> Result<()> {
    let breakpoint = ctx.config.nav.desktop_breakpoint;
    let closers = [
        MenuEvent::ButtonClicked,
        MenuEvent::LinkClicked,
        MenuEvent::OutsideClick,
        MenuEvent::Escape,
        MenuEvent::Resize { width: breakpoint },
    ];
    for closer in closers {
        let mut menu = MobileMenu::default();
        ensure!(
            menu.handle(MenuEvent::ButtonClicked, breakpoint) == Some(true),
            "button did not open the menu"
        );
        ensure!(
            menu.handle(closer, breakpoint) == Some(false),
            "{closer:?} did not close the menu"
        );
    }
    let mut menu = MobileMenu::default();
    menu.handle(MenuEvent::ButtonClicked, breakpoint);
    ensure!(
        menu.handle(MenuEvent::Resize { width: breakpoint - 1.0 }, breakpoint).is_none(),
        "narrow resize closed the menu"
    );
    Ok(())
}

fn toast_lifecycle(ctx: &ScenarioCtx) -> Result<()> {
    let timing = &ctx.config.timing;
    for style in [ToastStyle::Banner, ToastStyle::Card] {
        let timeline = ToastTimeline::new(style, timing);
        ensure!(timeline.reveal_at == timing.toast_enter_ms, "{style:?} reveal delay");
        ensure!(timeline.leave_at == style.dwell_ms(timing), "{style:?} dwell");
        ensure!(
            timeline.remove_at == timeline.leave_at + timing.toast_exit_ms,
            "{style:?} removal delay"
        );
    }

    let mut stack = ToastStack::new(ToastStyle::Card);
    let first = stack.push(Notice::info("one"));
    let second = stack.push(Notice::info("one"));
    ensure!(stack.len() == 2, "identical toasts were de-duplicated");
    ensure!(stack.reveal(first), "reveal failed");
    ensure!(stack.remove(first), "manual dismiss failed");
    ensure!(!stack.remove(first), "removal of a dismissed toast reported a change");
    ensure!(stack.begin_leave(second), "entering toast could not leave");
    ensure!(stack.remove(second) && stack.is_empty(), "stack not empty after removal");
    Ok(())
}

fn contact_actions(ctx: &ScenarioCtx) -> Result<()> {
    let contact = &ctx.config.contact;
    let messages = &ctx.config.messages;

    match ContactMethod::Email.action(contact, messages) {
        OutboundAction::Navigate(url) => ensure!(
            url.starts_with(&format!("mailto:{}?subject=", contact.support_email))
                && !url.contains(' '),
            "bad mailto link {url}"
        ),
        other => bail!("email produced {other:?}"),
    }
    match ContactMethod::WhatsApp.action(contact, messages) {
        OutboundAction::OpenNewContext(url) => ensure!(
            url.starts_with(&format!("https://wa.me/{}?text=", contact.whatsapp_number)),
            "bad WhatsApp link {url}"
        ),
        other => bail!("WhatsApp produced {other:?}"),
    }
    ensure!(
        matches!(
            ContactMethod::LiveChat.action(contact, messages),
            OutboundAction::Notify(ref n) if n.severity == Severity::Info
        ),
        "live chat did not raise an info toast"
    );
    ensure!(
        "Fax Support".parse::<ContactMethod>().is_err(),
        "unknown contact card accepted"
    );

    let ok = newsletter_signup("reader@example.com", messages);
    ensure!(ok.severity == Severity::Success, "valid newsletter email refused");
    let bad = newsletter_signup("reader@", messages);
    ensure!(bad.severity == Severity::Error, "invalid newsletter email accepted");
    Ok(())
}

fn scroll_effects(ctx: &ScenarioCtx) -> Result<()> {
    let cfg = &ctx.config.scroll;
    let at = HeaderStyle::for_scroll(cfg.header_threshold, Theme::Dark, cfg);
    let past = HeaderStyle::for_scroll(cfg.header_threshold + 1.0, Theme::Dark, cfg);
    ensure!(!at.scrolled && past.scrolled, "header threshold is not strict");
    ensure!(
        !scroll_top_visible(cfg.scroll_top_threshold, cfg)
            && scroll_top_visible(cfg.scroll_top_threshold + 1.0, cfg),
        "scroll-to-top threshold is not strict"
    );
    ensure!(
        parallax_offset(1, 100.0, cfg) < parallax_offset(0, 100.0, cfg),
        "later parallax layers do not move faster"
    );
    let target = anchor_target(1_000.0, 80.0, cfg);
    ensure!(
        (target - (1_000.0 - 80.0 - cfg.anchor_gap)).abs() < f64::EPSILON,
        "anchor offset ignores header height or gap"
    );
    Ok(())
}
