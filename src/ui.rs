use crate::models::{MonthGrid, StatsResponse};

const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn render_index(
    grid: &MonthGrid,
    stats: &StatsResponse,
    selected: Option<&str>,
    notice: Option<&str>,
) -> String {
    let (prev_year, prev_month) = grid.prev;
    let (next_year, next_month) = grid.next;
    let alert = notice
        .map(|message| format!(r#"<div class="alert" role="alert">{message}</div>"#))
        .unwrap_or_default();
    let selected_label = selected.unwrap_or("none");

    INDEX_HTML
        .replace("{{TITLE}}", &grid.title)
        .replace("{{PREV_HREF}}", &format!("/?year={prev_year}&month={prev_month}"))
        .replace("{{NEXT_HREF}}", &format!("/?year={next_year}&month={next_month}"))
        .replace("{{WEEKDAYS}}", &render_weekdays())
        .replace("{{DAYS}}", &render_days(grid))
        .replace("{{ALERT}}", &alert)
        .replace("{{SELECTED}}", selected.unwrap_or(""))
        .replace("{{SELECTED_LABEL}}", selected_label)
        .replace("{{YEAR}}", &grid.year.to_string())
        .replace("{{MONTH}}", &grid.month.to_string())
        .replace("{{WEEK}}", &stats.week.to_string())
        .replace("{{YEAR_COUNT}}", &stats.year.to_string())
        .replace("{{TOTAL}}", &stats.total.to_string())
        .replace("{{WEEK_RANGE}}", &format!("{} to {}", stats.week_start, stats.week_end))
        .replace("{{RECOMMENDATION}}", stats.recommendation_text)
        .replace("{{RECOMMENDATION_COLOR}}", stats.recommendation.color())
}

fn render_weekdays() -> String {
    WEEKDAY_HEADERS
        .iter()
        .map(|name| format!(r#"<div class="weekday">{name}</div>"#))
        .collect()
}

fn render_days(grid: &MonthGrid) -> String {
    let mut html = String::new();
    for _ in 0..grid.leading_blanks {
        html.push_str(r#"<div class="day empty"></div>"#);
    }

    for day in &grid.days {
        let mut class = String::from("day");
        if day.is_today {
            class.push_str(" today");
        }
        if day.has_record {
            class.push_str(" has-record");
        }
        if day.is_selected {
            class.push_str(" selected");
        }

        let count = if day.has_record {
            format!(r#"<span class="count">{}</span>"#, day.count)
        } else {
            String::new()
        };

        html.push_str(&format!(
            r#"<a class="{class}" href="/?year={}&month={}&selected={}" data-date="{}"><span class="day-number">{}</span>{count}</a>"#,
            grid.year, grid.month, day.date, day.date, day.day
        ));
    }
    html
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Habit Calendar</title>
  <style>
    :root {
      --bg: #f4f1ea;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(720px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    .month-nav {
      display: flex;
      align-items: center;
      justify-content: space-between;
    }

    .month-nav h1 {
      margin: 0;
      font-size: 1.6rem;
    }

    .month-nav a {
      text-decoration: none;
      color: var(--accent-2);
      font-size: 1.4rem;
      padding: 4px 14px;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .weekday {
      text-align: center;
      font-size: 0.8rem;
      color: #8b857d;
      text-transform: uppercase;
    }

    .day {
      position: relative;
      min-height: 56px;
      border-radius: 12px;
      background: white;
      border: 1px solid rgba(47, 72, 88, 0.08);
      color: inherit;
      text-decoration: none;
      padding: 6px;
    }

    .day.empty {
      background: transparent;
      border: none;
    }

    .day.today {
      border-color: var(--accent-2);
    }

    .day.has-record {
      background: #ffe9e2;
    }

    .day.selected {
      outline: 3px solid var(--accent);
    }

    .count {
      position: absolute;
      right: 6px;
      bottom: 6px;
      font-weight: 600;
      color: var(--accent);
    }

    .alert {
      padding: 12px 16px;
      border-radius: 12px;
      background: #fdecea;
      color: #c63b2b;
    }

    .actions {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 12px;
    }

    button {
      width: 100%;
      border: none;
      border-radius: 999px;
      padding: 14px 18px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      color: white;
    }

    .btn-add {
      background: var(--accent);
    }

    .btn-remove {
      background: var(--accent-2);
    }

    .btn-quick {
      background: #8b857d;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
      gap: 12px;
    }

    .stat {
      background: white;
      border-radius: 16px;
      padding: 14px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }
  </style>
</head>
<body>
  <main class="app">
    <nav class="month-nav">
      <a id="prev-month" href="{{PREV_HREF}}" aria-label="Previous month">&lsaquo;</a>
      <h1 id="current-month-year">{{TITLE}}</h1>
      <a id="next-month" href="{{NEXT_HREF}}" aria-label="Next month">&rsaquo;</a>
    </nav>

    {{ALERT}}

    <section class="grid" id="calendar-days">
      {{WEEKDAYS}}
      {{DAYS}}
    </section>

    <p class="hint">Selected: <strong id="selected-date">{{SELECTED_LABEL}}</strong></p>

    <section class="actions">
      <form method="post" action="/records/add">
        <input type="hidden" name="date" value="{{SELECTED}}" />
        <input type="hidden" name="year" value="{{YEAR}}" />
        <input type="hidden" name="month" value="{{MONTH}}" />
        <button class="btn-add" id="add-record" type="submit">Add +1</button>
      </form>
      <form method="post" action="/records/remove">
        <input type="hidden" name="date" value="{{SELECTED}}" />
        <input type="hidden" name="year" value="{{YEAR}}" />
        <input type="hidden" name="month" value="{{MONTH}}" />
        <button class="btn-remove" id="remove-record" type="submit">Remove -1</button>
      </form>
      <form method="post" action="/today/add">
        <button class="btn-quick" id="add-today" type="submit">Log today</button>
      </form>
      <form method="post" action="/today/remove">
        <button class="btn-quick" id="remove-today" type="submit">Remove today</button>
      </form>
    </section>

    <section class="panel">
      <div class="stat">
        <span class="label">This week</span>
        <span class="value" id="week-count">{{WEEK}}</span>
      </div>
      <div class="stat">
        <span class="label">This year</span>
        <span class="value" id="year-count">{{YEAR_COUNT}}</span>
      </div>
      <div class="stat">
        <span class="label">Total</span>
        <span class="value" id="total-count">{{TOTAL}}</span>
      </div>
      <div class="stat">
        <span class="label">Recommendation</span>
        <span class="value" id="recommendation" style="color: {{RECOMMENDATION_COLOR}}">{{RECOMMENDATION}}</span>
      </div>
    </section>

    <p class="hint">Week runs Monday to Sunday ({{WEEK_RANGE}}).</p>
  </main>
</body>
</html>
"#;
