use std::fs;
use std::path::Path;

use pulseboard::config::DashboardConfig;
use pulseboard::state::expansion::CellRef;
use pulseboard::state::locale::{ContainerAttributes, Locale};
use pulseboard::state::render::{CellKey, CellOutput, RenderMode};
use pulseboard::ui::actions;

fn write_site(root: &Path) {
    let organizations = root.join("data").join("organizations");
    let accessibility = root.join("static/data/tables/accessibility");
    fs::create_dir_all(&organizations).unwrap();
    fs::create_dir_all(&accessibility).unwrap();
    fs::write(
        organizations.join("https.json"),
        include_str!("data/organizations_https.json"),
    )
    .unwrap();
    fs::write(
        accessibility.join("domains.json"),
        include_str!("data/accessibility_domains.json"),
    )
    .unwrap();
}

#[tokio::test]
async fn test_default_table_loads_and_draws() {
    let site = tempfile::tempdir().unwrap();
    write_site(site.path());
    let config = DashboardConfig::embedded().unwrap();
    let (_, settings) = config.select(None).unwrap();

    let handle = actions::load_table(site.path(), settings, None).await.unwrap();
    assert_eq!(handle.data().len(), 3);
    assert_eq!(handle.csv_path(), Some("/data/hosts/https.csv"));

    let locale = handle.resolve_locale(&ContainerAttributes::default());
    assert_eq!(locale, Locale::En);

    let drawn = handle.draw(locale);
    let first = &drawn.rows[0];
    let name_cell = first.cell(drawn.anchor).unwrap();
    assert_eq!(name_cell.attributes.scope.as_deref(), Some("row"));
    assert_eq!(name_cell.attributes.tabindex, Some(0));
    assert!(name_cell
        .markup
        .as_str()
        .contains("<a href=\"/en/domains/#q=Agency%20A\">Show 3 services</a>"));

    assert_eq!(
        handle.render_cell(first.data_index, drawn.anchor, RenderMode::Sort, locale),
        CellOutput::SortKey(CellKey::Text("Agency A".to_string()))
    );
}

#[tokio::test]
async fn test_french_container_switches_rendering() {
    let site = tempfile::tempdir().unwrap();
    write_site(site.path());
    let config = DashboardConfig::embedded().unwrap();
    let (_, settings) = config.select(None).unwrap();
    let handle = actions::load_table(site.path(), settings, None).await.unwrap();

    let container = ContainerAttributes::with_language("fr");
    let locale = handle.resolve_locale(&container);
    assert_eq!(locale, Locale::Fr);

    let drawn = handle.draw(locale);
    let html = drawn.rows[0].cell(drawn.anchor).unwrap().markup.as_str().to_string();
    assert!(html.contains("<div class=\"mb-2\">Agence A</div>"));
    assert!(html.contains("href=\"/fr/domains/#q=Agency%20A\""));
    assert!(html.contains("Montrer 3 services"));
}

#[tokio::test]
async fn test_accessibility_table_links_errors() {
    let site = tempfile::tempdir().unwrap();
    write_site(site.path());
    let config = DashboardConfig::embedded().unwrap();
    let (_, settings) = config.select(Some("accessibility-domains")).unwrap();

    let mut handle = actions::load_table(site.path(), settings, None).await.unwrap();
    assert_eq!(handle.csv_path(), None);

    let errorlist = handle
        .columns()
        .iter()
        .position(|column| column.title_key == Some("column.error_details"))
        .unwrap();

    let drawn = handle.draw(Locale::En);
    let html = drawn.rows[0].cell(errorlist).unwrap().markup.as_str().to_string();
    assert!(html.contains("href=\"/a11y/domain/canada.example.gc.ca#ColorContrast\""));
    assert!(html.contains("href=\"/a11y/domain/canada.example.gc.ca#HTMLAttribute\""));
    assert!(!html.contains("Missing Image Descriptions"));

    let clean = drawn.rows[1].cell(errorlist).unwrap().markup.as_str().to_string();
    assert_eq!(clean, "<span class=\"noErrors\">No errors found.</span>");

    assert!(handle.sort_by_column_toggle(errorlist));
    assert_eq!(handle.visible_row_indices(Locale::En), vec![1, 0]);

    handle.set_search("contrast".to_string());
    assert_eq!(handle.visible_row_indices(Locale::En), vec![0]);

    let anchor = handle.anchor_column();
    assert_eq!(handle.activate_cell(CellRef::new(0, errorlist)), Some(true));
    assert!(handle.draw(Locale::En).rows[0].expanded);
    assert_eq!(handle.activate_cell(CellRef::new(0, anchor)), Some(false));
    assert!(!handle.draw(Locale::En).rows[0].expanded);
}

#[tokio::test]
async fn test_missing_dataset_fails_to_load() {
    let site = tempfile::tempdir().unwrap();
    let config = DashboardConfig::embedded().unwrap();
    let (_, settings) = config.select(None).unwrap();

    let err = actions::load_table(site.path(), settings, None).await.unwrap_err();
    assert!(matches!(err, actions::LoadError::Dataset(_)));
}
