//! Session tests
//!
//! Tests the configure/edit lifecycle and exporting.

use fontgrid_edit::{charset, Cell, ConfigError, FontGridError, FontSession, GlyphConfig, Grid, RawConfigFields};
use pretty_assertions::assert_eq;

const GLYPH_A: usize = 33;

#[test]
fn test_new_session_has_full_charset() {
    let session = FontSession::new();

    assert_eq!(session.glyph_count(), charset::GLYPH_COUNT);
    assert_eq!(session.config(), &GlyphConfig::default());
    for glyph in session.glyphs() {
        assert_eq!(glyph, &Grid::new(&GlyphConfig::default()));
    }
}

#[test]
fn test_fresh_glyphs_encode_to_zero() {
    let session = FontSession::new();
    for glyph in 0..session.glyph_count() {
        assert_eq!(session.encode_glyph(glyph), vec![0; 14]);
    }
}

#[test]
fn test_with_invalid_config() {
    let result = FontSession::with_config(GlyphConfig::new(0, 16));
    assert!(matches!(result, Err(FontGridError::Config(ConfigError::Zero { .. }))));
}

#[test]
fn test_set_and_read_cell() {
    let mut session = FontSession::new();

    assert!(session.set_cell(GLYPH_A, 2, 3, true));
    assert_eq!(session.read_cell(GLYPH_A, 2, 3), Cell::On);
    // other glyphs are independent
    assert_eq!(session.read_cell(GLYPH_A + 1, 2, 3), Cell::Off);
}

#[test]
fn test_set_locked_cell_is_ignored() {
    let mut session = FontSession::new();

    assert!(!session.set_cell(GLYPH_A, 0, 0, true));
    assert_eq!(session.read_cell(GLYPH_A, 0, 0), Cell::Locked);
    assert!(!session.set_cell(GLYPH_A, 13, 15, false));
    assert_eq!(session.read_cell(GLYPH_A, 13, 15), Cell::Locked);
}

#[test]
fn test_toggle_round_trip() {
    let mut session = FontSession::new();
    let pristine = session.encode_glyph(GLYPH_A);

    session.toggle_cell(GLYPH_A, 4, 4);
    assert_ne!(session.encode_glyph(GLYPH_A), pristine);
    session.toggle_cell(GLYPH_A, 4, 4);
    assert_eq!(session.encode_glyph(GLYPH_A), pristine);
}

#[test]
fn test_clear_glyph() {
    let mut session = FontSession::new();
    session.set_cell(GLYPH_A, 2, 2, true);
    session.set_cell(GLYPH_A + 1, 2, 2, true);

    session.clear_glyph(GLYPH_A);

    assert!(session.glyph(GLYPH_A).unwrap().is_blank());
    assert!(!session.glyph(GLYPH_A + 1).unwrap().is_blank());
}

#[test]
fn test_glyph_for_char() {
    let mut session = FontSession::new();
    session.set_cell(GLYPH_A, 5, 5, true);

    assert_eq!(session.glyph_for_char('A'), session.glyph(GLYPH_A));
    assert_eq!(session.glyph_for_char(' '), session.glyph(0));
    assert_eq!(session.glyph_for_char('~'), session.glyph(94));
    assert!(session.glyph_for_char('\u{e9}').is_none());
    assert!(session.glyph(charset::GLYPH_COUNT).is_none());
}

#[test]
fn test_reconfigure_discards_edits() {
    let mut session = FontSession::new();
    session.set_cell(GLYPH_A, 2, 2, true);

    let config = GlyphConfig::new(8, 8).with_padding(0, 1, 0, 2);
    session.reconfigure(config).unwrap();

    assert_eq!(session.config(), &config);
    assert_eq!(session.glyph_count(), charset::GLYPH_COUNT);
    for glyph in session.glyphs() {
        assert_eq!(glyph, &Grid::new(&config));
    }
}

#[test]
fn test_rejected_config_leaves_session_unchanged() {
    let mut session = FontSession::new();
    session.set_cell(GLYPH_A, 2, 2, true);
    let before = session.export();

    let result = session.reconfigure(GlyphConfig::new(5, 16).with_padding(3, 3, 0, 0));

    assert!(matches!(
        result,
        Err(FontGridError::Config(ConfigError::NoDrawableRows { rows: 5, top: 3, bottom: 3 }))
    ));
    assert_eq!(session.config(), &GlyphConfig::default());
    assert_eq!(session.read_cell(GLYPH_A, 2, 2), Cell::On);
    assert_eq!(session.export(), before);
}

#[test]
fn test_apply_fields() {
    let mut session = FontSession::new();
    session.set_cell(GLYPH_A, 2, 2, true);

    session.apply_fields(&RawConfigFields::new("8", "8", "0", "0", "0", "0")).unwrap();

    assert_eq!(session.config(), &GlyphConfig::new(8, 8));
    assert_eq!(session.read_cell(GLYPH_A, 2, 2), Cell::Off);
    assert_eq!(session.raw_fields(), RawConfigFields::new("8", "8", "0", "0", "0", "0"));
}

#[test]
fn test_apply_fields_rejects_non_numeric() {
    let mut session = FontSession::new();
    session.set_cell(GLYPH_A, 2, 2, true);

    let result = session.apply_fields(&RawConfigFields::new("14", "sixteen", "1", "3", "1", "9"));

    assert!(matches!(result, Err(FontGridError::Config(ConfigError::NotANumber { .. }))));
    assert_eq!(session.read_cell(GLYPH_A, 2, 2), Cell::On);
}

#[test]
fn test_apply_toml() {
    let mut session = FontSession::new();

    session.apply_toml("rows = 16\ncols = 8\npad_top = 0\npad_bottom = 0\npad_left = 0\npad_right = 0").unwrap();
    assert_eq!(session.config(), &GlyphConfig::new(16, 8));

    assert!(session.apply_toml("rows = \"many\"").is_err());
    assert_eq!(session.config(), &GlyphConfig::new(16, 8));
}

#[test]
fn test_raw_fields_default() {
    let session = FontSession::new();
    assert_eq!(session.raw_fields(), RawConfigFields::new("14", "16", "1", "3", "1", "9"));
}

#[test]
fn test_export_single_cell() {
    let mut session = FontSession::with_config(GlyphConfig::new(1, 4)).unwrap();
    session.set_cell(0, 0, 0, true);

    assert_eq!(session.encode_glyph(0), vec![8]);

    let text = session.export();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "static const uint16_t Font4x1 [] = {");
    assert_eq!(lines[1], "    0x0008, /* sp */");
    assert_eq!(lines[2], "    0x0000, /* ! */");
    assert_eq!(lines.last(), Some(&"};"));
}

#[test]
fn test_export_default_layout() {
    let mut session = FontSession::new();
    // vertical bar in the first drawable column of 'A'
    for row in 1..11 {
        session.set_cell(GLYPH_A, row, 1, true);
    }

    let text = session.export();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), charset::GLYPH_COUNT + 2);
    assert_eq!(lines[0], "static const uint16_t Font6x14 [] = {");
    assert_eq!(
        lines[GLYPH_A + 1],
        format!("    0x0000, {}0x0000, 0x0000, 0x0000, /* A */", "0x4000, ".repeat(10))
    );
}
