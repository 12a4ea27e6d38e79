//! End-to-end rendering of the squirrel figure.
//!
//! Builds a miniature site on disk (a data file and an includes
//! directory), then checks that the tag, the page function, and a direct
//! partial render all produce the same `<figure>` block, byte for byte.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use image_tag::{Bindings, IMAGE_PARTIAL, ImageTable, ImageTag, Partials, RenderContext, register};

const IMAGE_PARTIAL_BODY: &str = r#"<figure>
  <img alt="{{ include.alt }}" src="{{ include.path }}" />
  <figcaption>
    {{ include.caption }}
    Image credit:
    <a href="{{ include.credit_url }}">
      CC-BY-NC-SA {{ include.credit_name }}
    </a>
  </figcaption>
</figure>"#;

const IMAGES_TOML: &str = r#"[squirrel]
alt = "A lovely squirrel (via include + data)"
path = "/images/squirrel.jpg"
caption = "A lovely squirrel (via include + data)"
credit_url = "https://www.flickr.com/photos/47644980@N00/5681166704"
credit_name = "hakim.cassimally"
"#;

const EXPECTED: &str = r#"<figure>
  <img alt="A lovely squirrel (via include + data)" src="/images/squirrel.jpg" />
  <figcaption>
    A lovely squirrel (via include + data)
    Image credit:
    <a href="https://www.flickr.com/photos/47644980@N00/5681166704">
      CC-BY-NC-SA hakim.cassimally
    </a>
  </figcaption>
</figure>"#;

struct Site {
    _root: tempfile::TempDir,
    table: image_tag::SharedImageTable,
    partials: Arc<Partials>,
}

fn site() -> Site {
    let root = tempfile::tempdir().unwrap();
    let includes = root.path().join("includes");
    fs::create_dir(&includes).unwrap();
    fs::write(includes.join("image.html"), IMAGE_PARTIAL_BODY).unwrap();

    let data = root.path().join("images.toml");
    fs::write(&data, IMAGES_TOML).unwrap();

    let table = ImageTable::from_path(Path::new(&data)).unwrap().into_shared();
    let partials = Arc::new(Partials::from_dir(&includes).unwrap());
    Site {
        _root: root,
        table,
        partials,
    }
}

#[test]
fn renders_squirrel_figure_via_tag() {
    let site = site();
    let mut context = RenderContext::new(site.table, site.partials);

    let html = ImageTag::parse("squirrel").render(&mut context).unwrap();
    assert_eq!(html, EXPECTED);
}

#[test]
fn renders_squirrel_figure_via_page_function() {
    let site = site();
    let mut tera = tera::Tera::default();
    register(&mut tera, site.table, site.partials);

    let page = "{{ image(id=\"squirrel\") }}";
    let html = tera.render_str(page, &tera::Context::new()).unwrap();
    assert_eq!(html, EXPECTED);
}

#[test]
fn tag_output_matches_direct_partial_render() {
    let site = site();

    let record = site.table.read().get("squirrel").cloned().unwrap();
    let mut bindings = Bindings::new();
    bindings.insert("include", &record);
    let direct = site
        .partials
        .render(IMAGE_PARTIAL, bindings.context())
        .unwrap();

    let mut context = RenderContext::new(Arc::clone(&site.table), Arc::clone(&site.partials));
    let via_tag = ImageTag::parse("squirrel").render(&mut context).unwrap();

    assert_eq!(via_tag, direct);
    assert_eq!(direct, EXPECTED);
}

#[test]
fn unknown_identifier_fails_the_build() {
    let site = site();
    let mut context = RenderContext::new(site.table, site.partials);

    let err = ImageTag::parse("walrus").render(&mut context).unwrap_err();
    assert!(err.to_string().contains("unknown image identifier `walrus`"));
}
