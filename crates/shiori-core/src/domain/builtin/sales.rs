//! `sales_data.csv`: monthly sales for the first half year (unit: 10k yen).

use super::dataset_profile;
use crate::domain::{DomainId, DomainProfile};
use crate::rule::{ChartKind, ResponseTemplate, Rule};

const MONTH_OVER_MONTH: &str = "\
前月比の増減を算出しました。

**前月比（万円）**

| 月 | 売上 | 前月差 | 前月比 |
|----|------|--------|--------|
| 2月 | 3,800 | -400 | -9.5% |
| 3月 | 7,500 | +3,700 | +97.4% |
| 4月 | 5,100 | -2,400 | -32.0% |
| 5月 | 4,800 | -300 | -5.9% |
| 6月 | 5,200 | +400 | +8.3% |

**ポイント**
1. 3月は期末需要で前月のほぼ2倍に伸びています
2. 4月は反動で大きく減少しました
3. 6月は再び増加に転じています

※ 1月は前月データがないため算出対象外です。";

const PEAK_MONTH: &str = "\
売上が最も高かったのは**3月**で、7,500万円でした。

**上位3ヶ月**

| 順位 | 月 | 売上（万円） |
|------|----|--------------|
| 1 | 3月 | 7,500 |
| 2 | 6月 | 5,200 |
| 3 | 4月 | 5,100 |

※ 最も低かったのは2月の3,800万円です。";

const TOTAL: &str = "\
上半期（1月〜6月）の売上を集計しました。

**集計結果**

| 指標 | 値 |
|------|----|
| 合計 | 30,600万円 |
| 月平均 | 5,100万円 |
| 最大 | 7,500万円（3月） |
| 最小 | 3,800万円（2月） |

※ 月平均を上回ったのは3月と6月の2ヶ月です。";

const TREND: &str = "\
月別の売上推移をグラフにしました。

**月別売上（万円）**

| 月 | 売上 |
|----|------|
| 1月 | 4,200 |
| 2月 | 3,800 |
| 3月 | 7,500 |
| 4月 | 5,100 |
| 5月 | 4,800 |
| 6月 | 5,200 |

**分析**
1. 3月に7,500万円のピークがあります
2. 4月以降は5,000万円前後で安定しています

※ グラフではピーク月を強調表示しています。";

pub fn profile() -> DomainProfile {
    dataset_profile(
        DomainId::Sales,
        "売上データ分析",
        "sales_data.csv",
        vec![
            Rule::new(
                "sales-month-over-month",
                ["比較", "増減", "伸び"],
                ResponseTemplate::with_chart(MONTH_OVER_MONTH, ChartKind::SalesBar),
            )
            .requiring("前月"),
            Rule::new(
                "sales-peak",
                ["最高", "ピーク", "一番", "最も", "最大"],
                ResponseTemplate::with_chart(PEAK_MONTH, ChartKind::SalesBar),
            ),
            Rule::new(
                "sales-total",
                ["合計", "総額", "累計", "平均"],
                ResponseTemplate::with_chart(TOTAL, ChartKind::SalesBar),
            ),
            Rule::new(
                "sales-trend",
                ["推移", "グラフ", "月別", "トレンド", "売上"],
                ResponseTemplate::with_chart(TREND, ChartKind::SalesBar),
            ),
        ],
        &[
            "売上推移をグラフにして",
            "売上が最も高い月は？",
            "上半期の売上合計は？",
            "前月比の増減を教えて",
        ],
    )
}
