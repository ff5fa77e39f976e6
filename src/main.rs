// SPDX-License-Identifier: MPL-2.0
use folio_ui::config::{self, paths, Config};
use folio_ui::dom::{Document, MemoryDocument, Selector, Togglable};
use folio_ui::interactions::CopyBackends;
use folio_ui::scheduler::{LocalScheduler, Scheduler, VirtualClock};
use folio_ui::scroll::{ACTIVE_CLASS, SCROLLED_CLASS};
use folio_ui::{sample, Page, PageEvent};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

struct Flags {
    config_dir: Option<String>,
    scrolls: Vec<f64>,
    notify: Option<String>,
    realtime: bool,
    log_level: log::LevelFilter,
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        scrolls: args.values_from_str("--scroll")?,
        notify: args.opt_value_from_str("--notify")?,
        realtime: args.contains("--realtime"),
        log_level: args
            .opt_value_from_str("--log-level")?
            .unwrap_or(log::LevelFilter::Info),
    };
    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("folio_ui: ignoring unexpected arguments: {rest:?}");
    }
    Ok(flags)
}

/// Where timers run: a virtual clock advanced by hand, or tokio's.
enum Clock {
    Virtual(Rc<VirtualClock>),
    Real,
}

impl Clock {
    async fn settle(&self, wait: Duration) {
        match self {
            Clock::Virtual(clock) => clock.advance(wait),
            // Timers due at the same instant fire in no set order.
            Clock::Real => tokio::time::sleep(wait + Duration::from_millis(1)).await,
        }
    }
}

fn report(page: &Page<MemoryDocument>) {
    let doc = page.document().borrow();
    let active = page
        .scroll()
        .highlighter()
        .links()
        .iter()
        .find(|(node, _)| {
            doc.element(*node)
                .is_some_and(|link| link.has_class(ACTIVE_CLASS))
        })
        .map_or("-", |(_, href)| href.as_str());
    let scrolled = doc
        .query(&Selector::class("navbar"))
        .and_then(|navbar| doc.element(navbar))
        .is_some_and(|navbar| navbar.has_class(SCROLLED_CLASS));
    log::info!(
        "scrollY={} active={active} scrolled={scrolled}",
        doc.scroll_y()
    );
}

/// Loads the page, scrolls through the requested offsets, then shows a toast
/// and follows it until it is gone.
async fn walk(page: &mut Page<MemoryDocument>, config: &Config, flags: &Flags, clock: &Clock) {
    page.dispatch(PageEvent::Load);
    clock.settle(Duration::from_millis(config::HERO_FADE_DELAY_MS)).await;

    for offset in &flags.scrolls {
        page.document().borrow_mut().set_scroll_y(*offset);
        page.dispatch(PageEvent::Scroll);
        clock.settle(config.scroll.debounce_wait()).await;
        report(page);
    }

    if let Some(message) = &flags.notify {
        page.notify(message.clone());
        log::info!("toast shown: {:?}", page.notifications().current_message());
        clock.settle(config.notifications.default_duration()).await;
        log::info!("toast phase: {:?}", page.notifications().phase());
        clock.settle(config.notifications.exit_duration()).await;
        log::info!("toast removed: {}", page.notifications().current().is_none());
    }
}

fn main() {
    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("folio_ui: {err}");
            std::process::exit(2);
        }
    };

    simple_logger::SimpleLogger::new()
        .with_level(flags.log_level)
        .without_timestamps()
        .init()
        .expect("failed to create logger instance");

    paths::init_cli_override(flags.config_dir.clone());
    let (config, warning) = config::load();
    if let Some(key) = warning {
        log::warn!("{key}: falling back to default settings");
    }

    let document = match sample::portfolio_document() {
        Ok(document) => Rc::new(RefCell::new(document)),
        Err(err) => {
            log::error!("cannot build the sample page: {err}");
            std::process::exit(1);
        }
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("failed to build tokio runtime");
    let local = tokio::task::LocalSet::new();
    local.block_on(&runtime, async {
        let virtual_clock = (!flags.realtime).then(|| Rc::new(VirtualClock::new()));
        let scheduler: Rc<dyn Scheduler> = match &virtual_clock {
            Some(clock) => Rc::clone(clock) as Rc<dyn Scheduler>,
            None => Rc::new(LocalScheduler::new()),
        };
        let clock = match virtual_clock {
            Some(clock) => Clock::Virtual(clock),
            None => Clock::Real,
        };
        let mut page = Page::mount(document, scheduler, &config, CopyBackends::default());
        report(&page);
        walk(&mut page, &config, &flags, &clock).await;
        if let Clock::Virtual(clock) = &clock {
            log::info!("virtual time elapsed: {:?}", clock.now());
        }
    });
}
