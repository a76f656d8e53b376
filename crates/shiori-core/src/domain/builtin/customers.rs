//! `customer_data.csv`: customer counts by age bracket and region.

use super::dataset_profile;
use crate::domain::{DomainId, DomainProfile};
use crate::rule::{ChartKind, ResponseTemplate, Rule};

const AGE: &str = "\
年代別の顧客数を集計しました。

**年代別顧客数**

| 年代 | 顧客数 | 構成比 |
|------|--------|--------|
| 20代 | 1,250 | 14.4% |
| 30代 | 2,800 | 32.2% |
| 40代 | 2,100 | 24.1% |
| 50代 | 1,600 | 18.4% |
| 60代+ | 950 | 10.9% |

**特徴**
1. 30代が最大の顧客層です
2. 30代・40代で全体の半数以上を占めています

※ 年齢未登録の顧客は集計から除外しています。";

const REGION: &str = "\
地域別の顧客分布です。

**地域別構成比**

| 地域 | 構成比 |
|------|--------|
| 関東 | 42% |
| 関西 | 28% |
| 中部 | 15% |
| 九州 | 10% |
| その他 | 5% |

関東・関西の二大都市圏で全体の70%を占めています。

※ 地域は登録住所の都道府県から判定しています。";

const TOTAL: &str = "\
登録顧客数は**8,700人**です。

**内訳**
1. 30代: 2,800人
2. 40代: 2,100人
3. 50代: 1,600人
4. 20代: 1,250人
5. 60代以上: 950人

※ 年代別の詳細はグラフをご覧ください。";

pub fn profile() -> DomainProfile {
    dataset_profile(
        DomainId::Customers,
        "顧客データ分析",
        "customer_data.csv",
        vec![
            Rule::new(
                "customer-age",
                ["年代", "年齢", "世代", "若"],
                ResponseTemplate::with_chart(AGE, ChartKind::CustomerAge),
            ),
            Rule::new(
                "customer-region",
                ["地域", "エリア", "地方", "関東", "関西", "分布"],
                ResponseTemplate::with_chart(REGION, ChartKind::CustomerRegion),
            ),
            Rule::new(
                "customer-total",
                ["顧客数", "何人", "人数", "合計"],
                ResponseTemplate::with_chart(TOTAL, ChartKind::CustomerAge),
            ),
        ],
        &[
            "年代別の顧客数は？",
            "地域別の分布を見せて",
            "顧客数の合計は？",
        ],
    )
}
