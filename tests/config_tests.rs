use photo_timeline::config::Configuration;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn parse_kebab_case_config() {
    let yaml = r#"
timeline-path: "/data/timeline.yaml"
shuffle-seed: 11
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.timeline_path, PathBuf::from("/data/timeline.yaml"));
    assert_eq!(cfg.shuffle_seed, Some(11));
    assert_eq!(cfg.slideshow.swap_delay, Duration::from_millis(800));
    assert_eq!(cfg.slideshow.advance, Duration::from_secs(9));
    assert_eq!(cfg.images.thumbnail_segment, "/thumbnail/");
    assert_eq!(cfg.gallery.collapse_threshold, 8);
}

#[test]
fn parse_humantime_slideshow_timings() {
    let yaml = r#"
slideshow:
  swap-delay: 500ms
  name-reveal: 2s
  age-reveal: 3s
  advance: 4s
gallery:
  highlight-clear-delay: 150ms
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let cfg = cfg.validated().unwrap();
    assert_eq!(cfg.slideshow.swap_delay, Duration::from_millis(500));
    assert_eq!(cfg.slideshow.name_reveal, Duration::from_secs(2));
    assert_eq!(cfg.slideshow.age_reveal, Duration::from_secs(3));
    assert_eq!(cfg.slideshow.advance, Duration::from_secs(4));
    assert_eq!(cfg.gallery.highlight_clear_delay, Duration::from_millis(150));
}

#[test]
fn parse_custom_url_segments() {
    let yaml = r#"
images:
  thumbnail-segment: "/thumbs/"
  original-segment: "/full/"
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.images.full_resolution("/thumbs/abc"), "/full/abc");
    assert_eq!(cfg.images.thumbnail("abc"), "/thumbs/abc");
}

#[test]
fn validated_rejects_labels_after_advance() {
    let yaml = r#"
slideshow:
  name-reveal: 10s
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let err = cfg.validated().unwrap_err();
    assert!(format!("{err:#}").contains("name-reveal"));
}

#[test]
fn validated_rejects_zero_swap_delay() {
    let yaml = r#"
slideshow:
  swap-delay: 0s
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert!(cfg.validated().is_err());
}

#[test]
fn validated_rejects_zero_collapse_threshold() {
    let yaml = r#"
gallery:
  collapse-threshold: 0
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    let err = cfg.validated().unwrap_err();
    assert!(err.to_string().contains("collapse-threshold"));
}

#[test]
fn load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "timeline-path: people.yaml\n").unwrap();
    let cfg = Configuration::from_yaml_file(&path).unwrap();
    assert_eq!(cfg.timeline_path, PathBuf::from("people.yaml"));
}
