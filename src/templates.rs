//! HTML rendering for the polls pages.
//!
//! Every piece of user-supplied text goes through [`escape`] before it is
//! written into markup.

use crate::routes::Route;
use crate::views::{DetailPage, EMPTY_INDEX_MESSAGE, IndexPage, ResultsPage};

pub fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn pluralize(count: i64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

fn layout(title: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        content
    )
}

pub fn render_index(page: &IndexPage) -> String {
    let content = if page.latest_question_list.is_empty() {
        format!("<p>{EMPTY_INDEX_MESSAGE}</p>\n")
    } else {
        let items: String = page
            .latest_question_list
            .iter()
            .map(|question| {
                format!(
                    "<li><a href=\"{}\">{}</a></li>\n",
                    Route::Detail(question.id).path(),
                    escape(&question.question_text)
                )
            })
            .collect();
        format!("<ul>\n{items}</ul>\n")
    };
    layout("Polls", &content)
}

pub fn render_detail(page: &DetailPage) -> String {
    let question = &page.question;
    let error = page
        .error_message
        .as_deref()
        .map(|message| format!("<p><strong>{}</strong></p>\n", escape(message)))
        .unwrap_or_default();
    let radios: String = page
        .choices
        .iter()
        .enumerate()
        .map(|(counter, choice)| {
            format!(
                "<input type=\"radio\" name=\"choice\" id=\"choice{n}\" value=\"{id}\">\n<label for=\"choice{n}\">{text}</label><br>\n",
                n = counter + 1,
                id = choice.id,
                text = escape(&choice.choice_text)
            )
        })
        .collect();

    let content = format!(
        "<form action=\"{action}\" method=\"post\">\n<fieldset>\n<legend><h1>{text}</h1></legend>\n{error}{radios}</fieldset>\n<input type=\"submit\" value=\"Vote\">\n</form>\n",
        action = Route::Vote(question.id).path(),
        text = escape(&question.question_text),
    );
    layout(&question.question_text, &content)
}

pub fn render_results(page: &ResultsPage) -> String {
    let question = &page.question;
    let items: String = page
        .choices
        .iter()
        .map(|choice| {
            format!(
                "<li>{} -- {}</li>\n",
                escape(&choice.choice_text),
                pluralize(choice.votes, "vote", "votes")
            )
        })
        .collect();

    let content = format!(
        "<h1>{text}</h1>\n<ul>\n{items}</ul>\n<a href=\"{again}\">Vote again?</a>\n",
        text = escape(&question.question_text),
        again = Route::Detail(question.id).path(),
    );
    layout(&question.question_text, &content)
}
