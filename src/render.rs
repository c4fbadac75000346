use crate::views::{DetailContext, IndexContext};

pub const EMPTY_INDEX_MESSAGE: &str = "No polls are available.";

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}</body>\n</html>\n",
        escape(title),
        body
    )
}

pub fn index(ctx: &IndexContext) -> String {
    if ctx.is_empty {
        return page("Polls", &format!("<p>{}</p>\n", EMPTY_INDEX_MESSAGE));
    }
    let items: String = ctx
        .latest_question_list
        .iter()
        .map(|q| format!("<li><a href=\"/polls/{}\">{}</a></li>\n", q.id.0, escape(&q.text)))
        .collect();
    page("Polls", &format!("<ul>\n{}</ul>\n", items))
}

pub fn detail(ctx: &DetailContext) -> String {
    let choices: String = ctx
        .choices
        .iter()
        .map(|c| format!("<li>{}</li>\n", escape(&c.text)))
        .collect();
    page(
        &ctx.question.text,
        &format!(
            "<h1>{}</h1>\n<ul>\n{}</ul>\n<a href=\"/polls/{}/results\">Results</a>\n",
            escape(&ctx.question.text),
            choices,
            ctx.question.id.0
        ),
    )
}

pub fn results(ctx: &DetailContext) -> String {
    let choices: String = ctx
        .choices
        .iter()
        .map(|c| {
            let noun = if c.votes == 1 { "vote" } else { "votes" };
            format!("<li>{} -- {} {}</li>\n", escape(&c.text), c.votes, noun)
        })
        .collect();
    page(
        &ctx.question.text,
        &format!(
            "<h1>{}</h1>\n<ul>\n{}</ul>\n<a href=\"/polls/{}\">Back</a>\n",
            escape(&ctx.question.text),
            choices,
            ctx.question.id.0
        ),
    )
}
