//! `inventory_data.csv`: stock per product and its six-month history.

use super::dataset_profile;
use crate::domain::{DomainId, DomainProfile};
use crate::rule::{ChartKind, ResponseTemplate, Rule};

const TREND: &str = "\
過去6ヶ月の在庫推移です。

**月末在庫数（個）**

| 月 | A製品 | B製品 | C製品 |
|----|-------|-------|-------|
| 1月 | 500 | 300 | 400 |
| 2月 | 450 | 250 | 380 |
| 3月 | 380 | 180 | 350 |
| 4月 | 420 | 150 | 320 |
| 5月 | 480 | 120 | 400 |
| 6月 | 450 | 200 | 380 |

**傾向**
1. B製品は5月まで減少が続き、6月に補充されました
2. A製品・C製品は350〜500個の範囲で推移しています

※ D製品・E製品は推移データの集計対象外です。";

const REORDER: &str = "\
発注点（200個）を下回っている製品があります。

**要発注製品**

| 製品 | 在庫数 | 発注点 | 不足数 |
|------|--------|--------|--------|
| B製品 | 120 | 200 | 80 |
| D製品 | 85 | 200 | 115 |

**推奨アクション**
1. D製品を優先して発注
2. B製品は来週までに発注

※ グラフの赤い破線が発注点です。";

const STOCK: &str = "\
現在の製品別在庫数です。

**製品別在庫（個）**

| 製品 | 在庫数 | 状態 |
|------|--------|------|
| A製品 | 450 | 適正 |
| B製品 | 120 | 要発注 |
| C製品 | 380 | 適正 |
| D製品 | 85 | 要発注 |
| E製品 | 520 | 過剰気味 |

在庫総数は1,555個です。

※ 発注点は全製品共通で200個です。";

pub fn profile() -> DomainProfile {
    dataset_profile(
        DomainId::Inventory,
        "在庫データ分析",
        "inventory_data.csv",
        vec![
            Rule::new(
                "inventory-trend",
                ["推移", "トレンド", "変化", "過去"],
                ResponseTemplate::with_chart(TREND, ChartKind::InventoryTrend),
            ),
            Rule::new(
                "inventory-reorder",
                ["発注", "不足", "欠品", "少な"],
                ResponseTemplate::with_chart(REORDER, ChartKind::InventoryStock),
            ),
            Rule::new(
                "inventory-stock",
                ["在庫", "製品", "残数", "一覧"],
                ResponseTemplate::with_chart(STOCK, ChartKind::InventoryStock),
            ),
        ],
        &[
            "製品別の在庫を見せて",
            "発注が必要な製品は？",
            "在庫推移を教えて",
        ],
    )
}
