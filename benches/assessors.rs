use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use content_scoring::{Assessor, AssessorKind, Paper, Researcher};

// ---------------------------------------------------------------------------
// Paper fixtures
// ---------------------------------------------------------------------------

/// Small article: a heading, three paragraphs and a link.
const SMALL_HTML: &str = r#"<h1>Choosing cat food</h1>
<p>Cat food comes in many kinds. Dry cat food keeps well, while wet food adds water to
your cat's diet. Most vets recommend a mix of both.</p>
<h2>Reading the label</h2>
<p>The label lists ingredients by weight. Look for named proteins first, and avoid
foods that list fillers before meat. <a href="https://example.org/labels">Learn more</a>.</p>
<p>However, every cat is different. Ask your vet before changing diets.</p>"#;

fn article(sections: usize) -> String {
    let mut s = String::from("<h1>Choosing cat food</h1>\n");
    for i in 1..=sections {
        s.push_str(&format!(
            "<h2>Section {i}: cat food basics</h2>\n\
             <p>Cat food should match the age and health of your cat. Kittens need more \
             protein than older cats, and senior cats often need fewer calories. However, \
             the ingredients matter more than the brand. The food was tested by vets, and \
             it is often recommended for indoor cats. Therefore, read the label carefully \
             before buying.</p>\n\
             <p>Wet food adds water to the diet. Dry food keeps well and is cheaper. \
             <a href=\"/guides/{i}\">Our guide</a> compares both, with \
             <a href=\"https://example.org/study/{i}\" rel=\"nofollow\">a study</a>.</p>\n\
             <ul><li>Protein first</li><li>No fillers</li></ul>\n\
             <img src=\"cat-{i}.jpg\" alt=\"cat food in a bowl\">\n"
        ));
    }
    s
}

fn paper(html: &str) -> Paper {
    Paper::new(html)
        .with_keyword("cat food")
        .with_synonyms("cat nutrition, feline diet")
        .with_title("Choosing cat food: a guide")
        .with_title_width(450)
        .with_description("How to choose cat food for your cat, from kitten to senior.")
        .with_slug("choosing-cat-food")
        .with_permalink("https://example.com/choosing-cat-food")
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// SEO and readability assessors at three document sizes, fresh researcher
/// per iteration.
fn bench_full_pipeline(c: &mut Criterion) {
    let seo = Assessor::preset(AssessorKind::Seo).unwrap();
    let content = Assessor::preset(AssessorKind::Content).unwrap();

    let inputs: &[(&str, Paper)] = &[
        ("small", paper(SMALL_HTML)),
        ("medium", paper(&article(20))),
        ("large", paper(&article(100))),
    ];

    let mut group = c.benchmark_group("full_pipeline");
    for (id, paper) in inputs {
        group.bench_with_input(BenchmarkId::from_parameter(id), paper, |b, paper| {
            b.iter(|| {
                let researcher = Researcher::for_paper(black_box(paper));
                let seo = seo.assess(paper, &researcher);
                let content = content.assess(paper, &researcher);
                (seo.score, content.score)
            })
        });
    }
    group.finish();
}

/// Memoisation: a warm researcher skips parsing and topic-form building.
fn bench_researcher_reuse(c: &mut Criterion) {
    let seo = Assessor::preset(AssessorKind::Seo).unwrap();
    let paper = paper(&article(20));

    let mut group = c.benchmark_group("researcher");
    group.bench_function("cold", |b| {
        b.iter(|| seo.assess(black_box(&paper), &Researcher::for_paper(&paper)))
    });

    let warm = Researcher::for_paper(&paper);
    seo.assess(&paper, &warm);
    group.bench_function("warm", |b| b.iter(|| seo.assess(black_box(&paper), &warm)));
    group.finish();
}

criterion_group!(benches, bench_full_pipeline, bench_researcher_reuse);
criterion_main!(benches);
