use crate::format::{compress_string, decompress_string, ConfigurationFormat};
use crate::loaders::combatflite;
use crate::models::f16::{F16Configuration, F16ConfigurationPatch, Section, Waypoint};
use crate::{Aircraft, AircraftModel, Configuration, FormatError};

const COMBATFLITE_EXPORT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Objects>
  <Waypoints>
    <Waypoint>
      <Name>TAKEOFF</Name>
      <Position><Latitude>41.9</Latitude><Longitude>41.85</Longitude><Altitude>18</Altitude></Position>
    </Waypoint>
    <Waypoint>
      <Name>orphan</Name>
    </Waypoint>
    <Waypoint>
      <Name>Target area
TGT</Name>
      <Position><Latitude>42.25</Latitude><Longitude>42.5</Longitude><Altitude>300.5</Altitude></Position>
    </Waypoint>
  </Waypoints>
</Objects>"#;

fn loaded_configuration() -> F16Configuration {
    let mut cfg = F16Configuration::default();
    cfg.waypoints.push(Waypoint::new(1, "HOME", "N 41.608", "E 041.599", 59));
    cfg.waypoints.push(Waypoint::new(2, "", "N 42.000", "E 042.000", 0));
    cfg.radios.com1.presets[0].frequency = "251.00".to_string();
    cfg.radios.com1.presets[0].name = "TOWER".to_string();
    cfg.radios.com2.enable_guard = true;
    cfg.cms.program_mut(3).unwrap().flare.burst_interval = 0.125;
    cfg.mfd.configurations[2].right_mfd.pages[2] = crate::models::f16::mfd::MfdPage::Flir;
    cfg.harm.tables[0].emitters = vec![126, 127];
    cfg.hts.manual_table[0] = 120;
    cfg.misc.tacan.channel = 77;
    cfg
}

#[test]
fn test_json_round_trip_every_section() {
    let cfg = loaded_configuration();
    let back = F16Configuration::from_json(&cfg.to_json().unwrap()).unwrap();

    assert_eq!(back.waypoints, cfg.waypoints);
    assert_eq!(back.radios, cfg.radios);
    assert_eq!(back.cms, cfg.cms);
    assert_eq!(back.mfd, cfg.mfd);
    assert_eq!(back.harm, cfg.harm);
    assert_eq!(back.hts, cfg.hts);
    assert_eq!(back.misc, cfg.misc);
}

/// xorshift64, so the float values below are the same on every run.
fn float_values(count: usize) -> Vec<f64> {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    let mut out = Vec::with_capacity(count);
    while out.len() < count {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let value = f64::from_bits(state);
        if value.is_finite() {
            out.push(value);
        }
    }
    out
}

#[test]
fn test_json_round_trip_keeps_floats_exact() {
    let values = float_values(24 * 1000);
    for chunk in values.chunks(24) {
        let mut cfg = loaded_configuration();
        for (program, v) in cfg.cms.programs.iter_mut().zip(chunk.chunks(4)) {
            program.chaff.burst_interval = v[0];
            program.chaff.salvo_interval = v[1];
            program.flare.burst_interval = v[2];
            program.flare.salvo_interval = v[3] / 1e300;
        }

        let back = F16Configuration::from_json(&cfg.to_json().unwrap()).unwrap();
        assert_eq!(back, cfg);
    }
}

#[test]
fn test_non_object_json_is_rejected() {
    for text in ["[]", "[{}, {}]", "null", "42"] {
        assert!(
            matches!(F16Configuration::from_json(text), Err(FormatError::Unrecognised { .. })),
            "{text} was accepted"
        );
    }
}

#[test]
fn test_compression_round_trip_is_exact() {
    let json = loaded_configuration().to_json().unwrap();
    let blob = compress_string(&json, 6).unwrap();
    assert_eq!(decompress_string(&blob).unwrap(), json);
}

#[test]
fn test_compressed_string_round_trip() {
    let cfg = loaded_configuration();
    let blob = cfg.to_compressed_string().unwrap();
    assert_eq!(F16Configuration::from_compressed_string(&blob).unwrap(), cfg);
}

#[test]
fn test_corrupt_compressed_string_fails_cleanly() {
    let blob = loaded_configuration().to_compressed_string().unwrap();
    let truncated = &blob[..blob.len() / 2];
    assert!(F16Configuration::from_compressed_string(truncated).is_err());
    assert!(F16Configuration::from_compressed_string("").is_err());
}

#[test]
fn test_compressed_xml_is_accepted() {
    let blob = compress_string(COMBATFLITE_EXPORT, 6).unwrap();
    let cfg = F16Configuration::from_compressed_string(&blob).unwrap();
    assert_eq!(cfg.waypoints.len(), 2);
}

#[test]
fn test_json_path_falls_back_to_legacy_import() {
    let via_json = F16Configuration::from_json(COMBATFLITE_EXPORT).unwrap();
    let direct = combatflite::load_f16(COMBATFLITE_EXPORT).unwrap();
    assert_eq!(via_json, direct);

    let sequences: Vec<u32> = via_json.waypoints.waypoints.iter().map(|w| w.sequence).collect();
    assert_eq!(sequences, vec![1, 3]);
    assert_eq!(via_json.waypoints.waypoints[1].name, "TGT");
    assert_eq!(via_json.waypoints.waypoints[1].elevation, 985);
}

#[test]
fn test_unrecognised_text_fails() {
    let err = F16Configuration::from_json("{\"Waypoints\": [").unwrap_err();
    assert!(matches!(err, FormatError::Unrecognised { .. }));
    assert!(F16Configuration::from_json("").is_err());
}

#[test]
fn test_merge_waypoints_only() {
    let mut dest = loaded_configuration();
    let original = dest.clone();
    let source = combatflite::load_f16(COMBATFLITE_EXPORT).unwrap();
    let expected = source.waypoints.clone();

    dest.copy_configuration(F16ConfigurationPatch::from_sections(source, &[Section::Waypoints]));

    assert_eq!(dest.waypoints, expected);
    assert_eq!(dest.radios, original.radios);
    assert_eq!(dest.cms, original.cms);
    assert_eq!(dest.mfd, original.mfd);
    assert_eq!(dest.harm, original.harm);
    assert_eq!(dest.hts, original.hts);
    assert_eq!(dest.misc, original.misc);
}

#[test]
fn test_partial_json_merges_as_patch() {
    let mut dest = loaded_configuration();
    let patch: F16ConfigurationPatch = serde_json::from_str(r#"{"Misc": {"Bingo": 2200}}"#).unwrap();
    dest.copy_configuration(patch);

    assert_eq!(dest.misc.bingo, 2200);
    assert_eq!(dest.waypoints, loaded_configuration().waypoints);
}

#[test]
fn test_import_into_new_preset() {
    let mut aircraft = Aircraft::new(AircraftModel::F16C);
    let cfg = Configuration::from_json(aircraft.model(), COMBATFLITE_EXPORT).unwrap();
    let preset = aircraft.create_preset("Imported", Some(cfg));

    let waypoints = &preset.configuration.as_f16().unwrap().waypoints;
    assert_eq!(waypoints.len(), 2);
}
