#![allow(clippy::panic)]

use codspeed_criterion_compat::{criterion_group, criterion_main, Criterion};
use sparql_triples_model::{Answer, QaRecord};
use sparql_triples_parser::{
    normalize_all, process_parallel, ExtractorConfig, NamespaceCollapser, TripleExtractor,
};

fn collapse_query(c: &mut Criterion) {
    let collapser = NamespaceCollapser::default();
    let query = generate_query(0);
    c.bench_function("NamespaceCollapser::collapse", |b| {
        b.iter(|| collapser.collapse(&query).len());
    });
}

fn extract_corpus(c: &mut Criterion) {
    let mut corpus = generate_corpus(1_000);
    normalize_all(&mut corpus, &NamespaceCollapser::default());

    c.bench_function("TripleExtractor::process_all", |b| {
        b.iter(|| {
            let mut records = corpus.clone();
            TripleExtractor::default().process_all(&mut records);
            records
        });
    });
    c.bench_function("process_parallel", |b| {
        b.iter(|| {
            let mut records = corpus.clone();
            process_parallel(&mut records, &ExtractorConfig::default());
            records
        });
    });
}

criterion_group!(extract, collapse_query, extract_corpus);
criterion_main!(extract);

fn generate_query(i: usize) -> String {
    format!(
        "PREFIX ex{i}: <http://example.com/{i}/> SELECT DISTINCT ?uri WHERE {{ \
         {{ ?uri <http://dbpedia.org/ontology/birthPlace> <http://dbpedia.org/resource/City{i}> ; \
         <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://dbpedia.org/ontology/Person> . \
         FILTER(STRSTARTS(STR(?uri), \"http://dbpedia.org/\")) }} \
         UNION {{ ?uri ex{i}:knows ?other , ex{i}:someone }} }} ORDER BY ?uri LIMIT 10"
    )
}

fn generate_corpus(count: usize) -> Vec<QaRecord> {
    (0..count)
        .map(|i| {
            QaRecord::new(generate_query(i)).with_answers(vec![Answer::binding(
                "uri",
                format!("http://dbpedia.org/resource/Person{i}"),
            )])
        })
        .collect()
}
