use criterion::{black_box, criterion_group, criterion_main, Criterion};

use encoding_rs::KOI8_R;
use quizdrill_core::parser::{parse_record, parse_record_str};

fn bench_parse_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_record");

    let small = "Вопрос: 2+2?\nОтвет:\nЧетыре\nЗачет:\n4\n";
    let typical = generate_record(8, 3);
    let large = generate_record(200, 40);

    let (small_koi8, _, _) = KOI8_R.encode(small);
    let small_koi8 = small_koi8.into_owned();

    group.bench_function("small_str", |b| {
        b.iter(|| parse_record_str(black_box(small)))
    });

    group.bench_function("small_koi8r", |b| {
        b.iter(|| parse_record(black_box(&small_koi8)))
    });

    group.bench_function("typical", |b| {
        b.iter(|| parse_record_str(black_box(&typical)))
    });

    group.bench_function("large", |b| b.iter(|| parse_record_str(black_box(&large))));

    group.finish();
}

fn generate_record(question_lines: usize, alternates: usize) -> String {
    let mut s = String::from("Вопрос 1:\n");
    for i in 0..question_lines {
        s.push_str(&format!("Строка вопроса номер {i}, довольно длинная.\n"));
    }
    s.push_str("Ответ:\nКанонический ответ. С уточнением в скобках (вот таким).\n");
    s.push_str("Зачет:\n");
    let alts: Vec<String> = (0..alternates)
        .map(|i| format!("вариант {i}"))
        .collect();
    s.push_str(&alts.join("; "));
    s.push_str("\nКомментарий:\nДлинный комментарий, который парсер игнорирует.\n");
    s
}

criterion_group!(benches, bench_parse_record);
criterion_main!(benches);
