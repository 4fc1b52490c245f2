use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use snowball_rs::{EnglishStemmer, Language, RussianStemmer, Stemmer};

/// A spread of English forms: plurals, possessives, `ed`/`ing` forms,
/// derivational chains, stop words and exception entries.
const ENGLISH_WORDS: &[&str] = &[
    "caresses",
    "ponies",
    "cat's",
    "running",
    "hopping",
    "hoping",
    "agreed",
    "happy",
    "quickly",
    "conditional",
    "rational",
    "generalization",
    "sensational",
    "effectiveness",
    "vietnamization",
    "troubled",
    "falling",
    "children's",
    "the",
    "having",
    "skies",
    "proceeding",
    "abyss",
    "says",
];

/// A spread of Russian forms: noun, adjectival, verb, reflexive and
/// superlative endings plus stop words.
const RUSSIAN_WORDS: &[&str] = &[
    "весна",
    "книга",
    "остров",
    "лошадь",
    "красивый",
    "программистом",
    "бегавшая",
    "говорили",
    "прочитав",
    "казалось",
    "странный",
    "быстрейший",
    "возможность",
    "технологии",
    "между",
    "всегда",
];

fn bench_vocabulary(c: &mut Criterion) {
    let english = EnglishStemmer::new();
    let russian = RussianStemmer::new();
    let mut group = c.benchmark_group("vocabulary");

    group.bench_with_input(
        BenchmarkId::new("stem", "english"),
        ENGLISH_WORDS,
        |b, words| {
            b.iter(|| {
                for word in words {
                    black_box(english.stem(black_box(word)));
                }
            });
        },
    );

    group.bench_with_input(
        BenchmarkId::new("stem", "russian"),
        RUSSIAN_WORDS,
        |b, words| {
            b.iter(|| {
                for word in words {
                    black_box(russian.stem(black_box(word)));
                }
            });
        },
    );

    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("english", |b| {
        b.iter(|| black_box(EnglishStemmer::new()));
    });

    group.bench_function("russian", |b| {
        b.iter(|| black_box(RussianStemmer::new()));
    });

    group.bench_function("registry", |b| {
        b.iter(|| {
            for language in [Language::English, Language::Russian] {
                black_box(Stemmer::new(black_box(language)));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_vocabulary, bench_construction);
criterion_main!(benches);
