//! The built-in DIY project catalog. Five sample records, Japanese display
//! locale, defined once at startup and never mutated.

use crate::types::{Difficulty, Material, Project, Step, Tool};

fn material(name: &str, quantity: &str) -> Material {
    Material {
        name: name.to_string(),
        quantity: quantity.to_string(),
    }
}

fn tool(name: &str, optional: bool) -> Tool {
    Tool {
        name: name.to_string(),
        optional,
    }
}

fn step(order: u32, description: &str, image_url: &str) -> Step {
    Step {
        order,
        description: description.to_string(),
        image_url: image_url.to_string(),
    }
}

pub fn builtin_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "シンプルな木製本棚".to_string(),
            description: "初心者向けの基本的な木工プロジェクト。必要な工具も最小限で作れます。"
                .to_string(),
            image_url: "https://source.unsplash.com/random/800x600?wooden+shelf".to_string(),
            difficulty: Difficulty::Easy,
            duration: "2-3時間".to_string(),
            category: "木工".to_string(),
            materials: vec![
                material("木材（1.8cm x 20cm x 180cm）", "3枚"),
                material("木ネジ（5cm）", "12本"),
            ],
            tools: vec![
                tool("電動ドリル", false),
                tool("メジャー", false),
                tool("鉛筆", false),
            ],
            steps: vec![
                step(
                    1,
                    "木材を必要なサイズにカットします。側板2枚（高さ90cm）と棚板3枚（幅60cm）を作ります。",
                    "https://source.unsplash.com/random/800x600?woodworking",
                ),
                step(
                    2,
                    "側板に棚板の取り付け位置を印をつけます。上下と中央に均等に配置します。",
                    "https://source.unsplash.com/random/800x600?measuring",
                ),
            ],
            likes: 124,
        },
        Project {
            id: 2,
            title: "ハーブガーデンプランター".to_string(),
            description: "ベランダや窓際で楽しむハーブガーデンの作り方。".to_string(),
            image_url: "https://source.unsplash.com/random/800x600?herb+garden".to_string(),
            difficulty: Difficulty::Easy,
            duration: "1-2時間".to_string(),
            category: "ガーデニング".to_string(),
            materials: vec![
                material("プランターボックス", "1個"),
                material("培養土", "5L"),
                material("ハーブの苗", "3～4株"),
            ],
            tools: vec![tool("園芸用シャベル", false), tool("じょうろ", false)],
            steps: vec![step(
                1,
                "プランターの底に排水用の穴があることを確認し、必要に応じて追加で開けます。",
                "https://source.unsplash.com/random/800x600?planter",
            )],
            likes: 89,
        },
        Project {
            id: 3,
            title: "モダンな壁掛けシェルフ".to_string(),
            description: "インテリアとして素敵な壁掛けシェルフの製作手順。".to_string(),
            image_url: "https://source.unsplash.com/random/800x600?wall+shelf".to_string(),
            difficulty: Difficulty::Medium,
            duration: "3-4時間".to_string(),
            category: "木工".to_string(),
            materials: vec![],
            tools: vec![],
            steps: vec![],
            likes: 156,
        },
        Project {
            id: 4,
            title: "多肉植物の寄せ植え".to_string(),
            description: "おしゃれな多肉植物の寄せ植えの作り方。".to_string(),
            image_url: "https://source.unsplash.com/random/800x600?succulent".to_string(),
            difficulty: Difficulty::Easy,
            duration: "1時間".to_string(),
            category: "ガーデニング".to_string(),
            materials: vec![],
            tools: vec![],
            steps: vec![],
            likes: 234,
        },
        Project {
            id: 5,
            title: "リサイクルパレットテーブル".to_string(),
            description: "廃材を利用したエコなDIYテーブルの作り方。".to_string(),
            image_url: "https://source.unsplash.com/random/800x600?pallet+table".to_string(),
            difficulty: Difficulty::Hard,
            duration: "4-5時間".to_string(),
            category: "木工".to_string(),
            materials: vec![],
            tools: vec![],
            steps: vec![],
            likes: 178,
        },
    ]
}
