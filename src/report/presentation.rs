use crate::model::category::Category;

pub fn category_color(category: Category) -> &'static str {
    match category {
        Category::SangatBaik => "green",
        Category::Baik => "blue",
        Category::Sedang => "yellow",
        Category::Busuk => "red",
        Category::Invalid => "gray",
    }
}

pub fn recommendation(category: Category) -> &'static str {
    match category {
        Category::SangatBaik => {
            "Ikan sangat segar. Layak dikonsumsi mentah atau diolah dengan cara apa pun."
        }
        Category::Baik => "Ikan segar. Layak dikonsumsi, sebaiknya segera diolah atau disimpan dingin.",
        Category::Sedang => {
            "Kesegaran mulai menurun. Olah dengan pemasakan sempurna dan jangan disimpan lama."
        }
        Category::Busuk => "Ikan tidak layak dikonsumsi. Jangan diolah untuk makanan.",
        Category::Invalid => "Data tidak lengkap. Isi minimal satu parameter penilaian.",
    }
}

pub fn explanation(category: Category, score: f64) -> String {
    match category {
        Category::SangatBaik => format!(
            "Skor {score:.2} menunjukkan mata cerah, insang merah cerah, dan daging kenyal; ciri ikan baru ditangkap."
        ),
        Category::Baik => format!(
            "Skor {score:.2} menunjukkan ikan masih segar dengan sedikit penurunan mutu pada beberapa parameter."
        ),
        Category::Sedang => format!(
            "Skor {score:.2} menunjukkan kemunduran mutu yang jelas; lendir dan bau mulai berubah."
        ),
        Category::Busuk => format!(
            "Skor {score:.2} menunjukkan ikan telah mengalami pembusukan pada sebagian besar parameter."
        ),
        Category::Invalid => "Tidak ada parameter yang dinilai sehingga skor tidak dapat dihitung.".to_string(),
    }
}
