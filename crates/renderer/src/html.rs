//! HTML rendering of the movie page.
//!
//! The page is a form with the genre and rating selectors followed by
//! either the movie table or a notice. Changing a selector resubmits the
//! form, which starts a new render cycle on the server.

use std::fmt::Write;

use crate::band::RatingPalette;
use crate::view::{MovieRow, Selection, TableView, ALL_RATINGS};

/// Everything needed to draw the page
#[derive(Debug, Clone)]
pub struct PageModel {
    /// Genres offered by the genre selector
    pub genres: Vec<String>,
    pub selection: Selection,
    pub view: TableView,
}

/// Render the full page
pub fn render_page(model: &PageModel, palette: &RatingPalette) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str(concat!(
        "<!DOCTYPE html>\n",
        "<html lang=\"en\">\n",
        "<head>\n",
        "<meta charset=\"utf-8\">\n",
        "<title>Movies</title>\n",
        "<link rel=\"stylesheet\" href=\"/styles.css\">\n",
        "</head>\n",
        "<body>\n",
        "<main class=\"container\">\n",
        "<h1>Movies</h1>\n",
    ));

    render_selectors(&mut html, model);
    render_table(&mut html, &model.view, palette);
    render_notice(&mut html, &model.view);

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn render_selectors(html: &mut String, model: &PageModel) {
    let selected_genre = model.selection.genre.as_deref().unwrap_or("");
    let selected_rating = model.selection.rating.as_deref().unwrap_or(ALL_RATINGS);

    html.push_str("<form method=\"get\" action=\"/\">\n");

    html.push_str("<select id=\"genre-selector\" name=\"genre\" onchange=\"this.form.submit()\">\n");
    push_option(html, "", "All genres", selected_genre.is_empty());
    for genre in &model.genres {
        push_option(html, genre, genre, genre.eq_ignore_ascii_case(selected_genre));
    }
    html.push_str("</select>\n");

    html.push_str("<select id=\"rating-selector\" name=\"rating\" onchange=\"this.form.submit()\">\n");
    push_option(html, ALL_RATINGS, "All ratings", selected_rating == ALL_RATINGS);
    for threshold in 1..=10 {
        let value = threshold.to_string();
        let label = format!("Below {threshold}");
        push_option(html, &value, &label, selected_rating == value);
    }
    html.push_str("</select>\n");

    html.push_str("</form>\n");
}

fn push_option(html: &mut String, value: &str, label: &str, selected: bool) {
    let _ = writeln!(
        html,
        "<option value=\"{}\"{}>{}</option>",
        escape(value),
        if selected { " selected" } else { "" },
        escape(label)
    );
}

fn render_table(html: &mut String, view: &TableView, palette: &RatingPalette) {
    let hidden = if view.is_table_visible() { "" } else { " d-none" };
    let _ = writeln!(html, "<table class=\"table{hidden}\">");
    html.push_str(concat!(
        "<thead><tr>",
        "<th>Title</th><th>Genre</th><th>Release Date</th><th>Director</th><th>Rating</th>",
        "</tr></thead>\n",
        "<tbody>\n",
    ));
    for row in view.rows() {
        render_row(html, row, palette);
    }
    html.push_str("</tbody>\n</table>\n");
}

fn render_row(html: &mut String, row: &MovieRow, palette: &RatingPalette) {
    let _ = writeln!(
        html,
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
         <td class=\"rating {}\" style=\"color: {}\">{}</td></tr>",
        escape(&row.title),
        escape(&row.genre),
        escape(&row.release_date),
        escape(&row.director),
        row.band.css_class(),
        escape(palette.color_for(row.band)),
        row.rating
    );
}

fn render_notice(html: &mut String, view: &TableView) {
    match view.notice() {
        Some(notice) => {
            let _ = writeln!(html, "<div class=\"alert\">{}</div>", escape(notice));
        }
        None => html.push_str("<div class=\"alert d-none\"></div>\n"),
    }
}

/// Escape text for HTML element content and quoted attributes
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::Movie;

    fn sample_model(view: TableView) -> PageModel {
        PageModel {
            genres: vec!["Action".to_string(), "Comedy".to_string()],
            selection: Selection::from_selectors(Some("comedy"), Some("8")),
            view,
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_page_with_rows() {
        let movies = vec![Movie {
            title: "<script>alert(1)</script>".to_string(),
            genre: "Comedy".to_string(),
            release_date: 0,
            director: "Harold Ramis".to_string(),
            rating: 1.5,
        }];
        let html = render_page(&sample_model(TableView::from_movies(&movies)), &RatingPalette::default());

        assert!(html.contains("<table class=\"table\">"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("class=\"rating rating-poor\" style=\"color: red\">1.5</td>"));
        assert!(html.contains("<div class=\"alert d-none\"></div>"));
    }

    #[test]
    fn test_page_keeps_selection() {
        let html = render_page(&sample_model(TableView::from_movies(&[])), &RatingPalette::default());

        assert!(html.contains("<option value=\"Comedy\" selected>Comedy</option>"));
        assert!(html.contains("<option value=\"8\" selected>Below 8</option>"));
        assert!(html.contains("<option value=\"Action\">Action</option>"));
    }

    #[test]
    fn test_page_hides_table_on_failure() {
        let html = render_page(&sample_model(TableView::failed()), &RatingPalette::default());

        assert!(html.contains("<table class=\"table d-none\">"));
        assert!(html.contains("<div class=\"alert\">Error fetching data.</div>"));
    }

    #[test]
    fn test_custom_palette() {
        let movies = vec![Movie {
            title: "Se7en".to_string(),
            genre: "Thriller".to_string(),
            release_date: 0,
            director: "David Fincher".to_string(),
            rating: 8.6,
        }];
        let palette = RatingPalette {
            excellent: "#00aa00".to_string(),
            ..RatingPalette::default()
        };
        let html = render_page(&sample_model(TableView::from_movies(&movies)), &palette);

        assert!(html.contains("style=\"color: #00aa00\">8.6</td>"));
    }
}
