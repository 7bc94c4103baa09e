use crate::handler::error::NO_DATA_MESSAGE;
use crate::models::DailySentiment;
use crate::utils::html::{escape_html, script_safe_json};
use crate::utils::timestamp::format_display;

pub const PAGE_TITLE: &str = "Stock Market Sentiment Dashboard";
const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub enum PageContent {
    Chart {
        figure_json: String,
        rows: Vec<DailySentiment>,
    },
    NoData,
    LoadError(String),
}

pub struct DashboardPage<'a> {
    pub companies: &'a [String],
    pub selected: Option<&'a str>,
    pub show_raw: bool,
    pub content: PageContent,
}

pub fn render(page: &DashboardPage<'_>) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<script src=\"{cdn}\"></script>\n<style>{css}</style>\n</head>\n<body>\n",
        title = PAGE_TITLE,
        cdn = PLOTLY_CDN,
        css = STYLE,
    ));
    html.push_str(&render_sidebar(page));
    html.push_str(&format!("<main>\n<h1>{}</h1>\n", PAGE_TITLE));

    match &page.content {
        PageContent::LoadError(msg) => {
            html.push_str(&format!(
                "<div class=\"error\">Failed to load dataset: {}</div>\n",
                escape_html(msg)
            ));
        }
        PageContent::NoData => {
            html.push_str(&format!("<div class=\"warning\">{}</div>\n", NO_DATA_MESSAGE));
        }
        PageContent::Chart { figure_json, rows } => {
            html.push_str("<div id=\"chart\"></div>\n");
            html.push_str(&format!(
                "<script>\nconst figure = {};\nPlotly.newPlot(\"chart\", figure.data, figure.layout);\n</script>\n",
                script_safe_json(figure_json)
            ));
            if page.show_raw {
                html.push_str(&render_table(rows));
            }
        }
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn render_sidebar(page: &DashboardPage<'_>) -> String {
    let mut options = String::new();
    for company in page.companies {
        let selected = if page.selected == Some(company.as_str()) {
            " selected"
        } else {
            ""
        };
        let name = escape_html(company);
        options.push_str(&format!(
            "<option value=\"{name}\"{selected}>{name}</option>\n"
        ));
    }
    let checked = if page.show_raw { " checked" } else { "" };
    format!(
        "<aside>\n<form method=\"get\" action=\"/\">\n\
         <label for=\"company\">Select a Company</label>\n\
         <select id=\"company\" name=\"company\" onchange=\"this.form.submit()\">\n{options}</select>\n\
         <label><input type=\"checkbox\" name=\"raw\" value=\"true\"{checked} onchange=\"this.form.submit()\"> Show raw data</label>\n\
         </form>\n</aside>\n"
    )
}

fn render_table(rows: &[DailySentiment]) -> String {
    let mut table = String::from(
        "<table class=\"raw\">\n<thead><tr><th>Time</th><th>Positive Weight</th><th>Negative Weight</th>\
         <th>Total Weight</th><th>Positive Ratio</th><th>Negative Ratio</th><th>Color</th></tr></thead>\n<tbody>\n",
    );
    for row in rows {
        table.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.4}</td><td>{:.4}</td>\
             <td><span class=\"swatch\" style=\"background:{color}\"></span>{color}</td></tr>\n",
            format_display(&row.time),
            row.positive_weight,
            row.negative_weight,
            row.total_weight,
            row.positive_ratio,
            row.negative_ratio,
            color = escape_html(&row.color),
        ));
    }
    table.push_str("</tbody>\n</table>\n");
    table
}

const STYLE: &str = "body{margin:0;display:flex;font-family:sans-serif}\
aside{width:240px;padding:1rem;background:#f0f2f6;min-height:100vh}\
aside label{display:block;margin:.75rem 0 .25rem}\
main{flex:1;padding:1rem 2rem}\
.warning{padding:.75rem;background:#fffbe6;border:1px solid #f5d76e}\
.error{padding:.75rem;background:#ffecec;border:1px solid #e06666}\
table.raw{border-collapse:collapse;margin-top:1rem}\
table.raw td,table.raw th{border:1px solid #ddd;padding:.25rem .5rem;text-align:right}\
.swatch{display:inline-block;width:.8rem;height:.8rem;margin-right:.4rem}";

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn companies() -> Vec<String> {
        vec!["TCS".to_string(), "M&M".to_string()]
    }

    #[test]
    fn sidebar_lists_companies_and_marks_selection() {
        let companies = companies();
        let html = render(&DashboardPage {
            companies: &companies,
            selected: Some("M&M"),
            show_raw: false,
            content: PageContent::NoData,
        });
        assert!(html.contains("<option value=\"TCS\">TCS</option>"));
        assert!(html.contains("<option value=\"M&amp;M\" selected>M&amp;M</option>"));
        assert!(html.contains("Select a Company"));
        assert!(html.contains(NO_DATA_MESSAGE));
        assert!(!html.contains("id=\"chart\""));
    }

    #[test]
    fn raw_table_only_when_toggled() {
        let companies = companies();
        let row = DailySentiment {
            time: NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            positive_weight: 10.0,
            negative_weight: 5.0,
            total_weight: 15.0,
            positive_ratio: 2.0 / 3.0,
            negative_ratio: 1.0 / 3.0,
            color: "rgba(0, 170, 0, 0.6)".to_string(),
        };
        let page = |show_raw| DashboardPage {
            companies: &companies,
            selected: Some("TCS"),
            show_raw,
            content: PageContent::Chart {
                figure_json: "{\"data\":[],\"layout\":{}}".to_string(),
                rows: vec![row.clone()],
            },
        };

        let hidden = render(&page(false));
        assert!(hidden.contains("Plotly.newPlot"));
        assert!(!hidden.contains("<table"));

        let shown = render(&page(true));
        assert!(shown.contains("<td>2024-01-15 00:00:00</td>"));
        assert!(shown.contains("<td>0.6667</td>"));
        assert!(shown.contains(" checked "));
    }

    #[test]
    fn load_errors_are_escaped() {
        let html = render(&DashboardPage {
            companies: &[],
            selected: None,
            show_raw: false,
            content: PageContent::LoadError("missing required column(s): <Time>".to_string()),
        });
        assert!(html.contains("Failed to load dataset: missing required column(s): &lt;Time&gt;"));
    }
}
