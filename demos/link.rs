//! Two links in a raw-mode terminal.
//!
//! Tab moves focus between them and shows the focus ring; clicking focuses
//! without one. Press `q` or Esc to quit. Logs go to `link-demo.log`.

use std::io::Write;

use crossterm::{cursor, execute, terminal};
use textual_link::prelude::*;
use textual_link::textual::{ActivityMonitor, Event, MouseEventKind, PushEvents, init_logger};
use textual_link::{run_event_loop, textual};

fn draw(ctx: &ThemeContext, links: &[Link<()>]) -> textual::Result<()> {
    let mut stdout = std::io::stdout();
    execute!(stdout, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))?;
    write!(stdout, "Tab: next link, click: focus first link, q: quit\r\n\r\n")?;
    for link in links {
        let node = link.render(ctx)?;
        for line in node.to_text().lines() {
            write!(stdout, "{}\r\n", line)?;
        }
        write!(stdout, "\r\n")?;
    }
    stdout.flush()?;
    Ok(())
}

fn focus(links: &mut [Link<()>], index: usize) {
    for (i, link) in links.iter_mut().enumerate() {
        if i != index && link.is_focused() {
            link.handle_blur(&FocusEvent::new());
        }
    }
    links[index].handle_focus(&FocusEvent::new());
}

fn main() -> textual::Result<()> {
    init_logger("link-demo.log")?;

    let theme = Theme::standard_themes()
        .remove("material-light")
        .unwrap_or_else(|| Theme::new("material-light", false));
    let ctx = ThemeContext::with_monitor(theme, ActivityMonitor::new(PushEvents));

    let mut links = vec![
        Link::new("Documentation").with_id("docs"),
        Link::new("Changelog")
            .with_id("changelog")
            .with_color(ColorToken::Secondary)
            .with_underline(UnderlinePolicy::Hover),
    ];
    for link in &mut links {
        link.mount(&ctx)?;
    }

    let mut focused = None;
    draw(&ctx, &links)?;
    run_event_loop(ctx.monitor(), |event| {
        match event {
            Event::Key(key) if key.code == KeyCode::Char('q') || key.code == KeyCode::Esc => {
                return Ok(true);
            }
            Event::Key(key) if key.code == KeyCode::Tab => {
                let next = focused.map_or(0, |i| (i + 1) % links.len());
                focus(&mut links, next);
                focused = Some(next);
            }
            Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                focus(&mut links, 0);
                focused = Some(0);
            }
            _ => {}
        }
        draw(&ctx, &links)?;
        Ok(false)
    })?;

    for link in &mut links {
        link.unmount();
    }
    Ok(())
}
