//! Internal knowledge base: HR, expenses, remote work, security, onboarding.

use crate::domain::{DocumentEntry, DomainId, DomainKind, DomainProfile, Fallback};
use crate::rule::{Attachment, ResponseTemplate, Rule, SourceRef};

const WORK_RULES: &str = "就業規則.pdf";
const EXPENSE_MANUAL: &str = "経費精算マニュアル.pdf";
const SYSTEM_GUIDE: &str = "社内システム利用ガイド.pdf";
const SECURITY_POLICY: &str = "情報セキュリティポリシー.pdf";
const ONBOARDING: &str = "新入社員オンボーディング.pdf";

const BEREAVEMENT_LEAVE: &str = "\
就業規則に基づき、親等に応じて以下の通り定められています。

**忌引休暇の日数**

| 親等 | 対象者 | 日数 |
|------|--------|------|
| 1親等 | 配偶者、子、父母 | 5日間 |
| 2親等 | 兄弟姉妹、祖父母 | 2日間 |

**申請方法**
1. 勤怠システムにログイン
2. 「休暇申請」から「特別休暇」を選択
3. 種別で「忌引休暇」を選択
4. 必要事項を入力して申請

※ 申請の際は、可能な限り事前に上長へご連絡ください。";

const EXPENSE_REIMBURSEMENT: &str = "\
経費精算の申請方法についてご説明します。

**対象となる経費**
- 交通費（電車、バス、タクシー等）
- 出張時の宿泊費・日当
- 業務上必要な消耗品購入費
- 接待交際費（事前承認が必要）

**申請手順**
1. 経費精算システムにログイン
2. 「新規申請」をクリック
3. 経費の種類を選択
4. 金額・日付・内容を入力
5. 領収書の画像をアップロード
6. 上長へ承認依頼を送信

**注意事項**
- 申請期限は支払日から1ヶ月以内です
- 5,000円以上の経費は領収書原本の提出が必要です
- 振込は毎月25日締め、翌月10日払いです

※ 不明点は経理部（内線: 1234）までお問い合わせください。";

const REMOTE_WORK: &str = "\
リモートワーク（在宅勤務）の申請手順をご案内します。

**申請条件**
- 入社6ヶ月以上経過していること
- 直属の上長の承認があること
- 業務内容がリモートワークに適していること

**申請手順**
1. 勤怠システムにログイン
2. 「勤務形態申請」を選択
3. 「リモートワーク」を選択
4. 希望日と業務予定を入力
5. 上長へ承認依頼

**ルール**
- 勤務開始・終了時にチャットで報告
- コアタイム（10:00〜15:00）は連絡可能な状態を維持
- 週2日以上の出社が推奨されています

**必要な環境**
- 安定したインターネット接続
- セキュリティソフト導入済みのPC
- VPN接続の設定完了

※ 機密情報を扱う業務は原則出社となります。";

const PAID_LEAVE: &str = "\
有給休暇の取得についてご説明します。

**付与日数（勤続年数別）**

| 勤続年数 | 付与日数 |
|----------|----------|
| 6ヶ月 | 10日 |
| 1年6ヶ月 | 11日 |
| 2年6ヶ月 | 12日 |
| 3年6ヶ月 | 14日 |
| 4年6ヶ月 | 16日 |
| 5年6ヶ月 | 18日 |
| 6年6ヶ月以上 | 20日 |

**申請方法**
1. 勤怠システムにログイン
2. 「休暇申請」→「有給休暇」を選択
3. 取得希望日を選択
4. 理由を入力（任意）
5. 申請を送信

**注意事項**
- 原則として3営業日前までに申請
- 繁忙期は調整をお願いする場合があります
- 未消化分は翌年度まで繰り越し可能（最大40日）

※ 残日数は勤怠システムで確認できます。";

const SECURITY: &str = "\
情報セキュリティに関するルールをご説明します。

**パスワードポリシー**
- 最低12文字以上
- 大文字・小文字・数字・記号を含む
- 90日ごとに変更が必要
- 過去5回分のパスワードは再利用不可

**アカウント管理**
- 共有アカウントの使用は禁止
- 離席時は必ず画面ロック（Win+L）
- 5回連続でログイン失敗するとロック

**パスワードを忘れた場合**
1. ログイン画面の「パスワードを忘れた方」をクリック
2. 登録メールアドレスにリセットリンクが届きます
3. リンクから新しいパスワードを設定

**不審なメール・アクセスを発見したら**
- 情報システム部へ即時報告（内線: 5555）
- 不審なリンクはクリックしない
- 添付ファイルは開かない

※ セキュリティ研修は年1回必須です。";

const ONBOARDING_GUIDE: &str = "\
新入社員オンボーディングについてご案内します。

**入社初日の流れ**
1. 9:00 人事部にて受付
2. 9:30 オリエンテーション開始
3. 12:00 ランチ（先輩社員と）
4. 13:00 部署への配属・挨拶
5. 14:00 PC・アカウント設定
6. 16:00 業務説明

**入社時に必要な書類**
- 年金手帳（またはマイナンバー）
- 給与振込口座届
- 扶養控除申告書
- 身元保証書
- 健康診断書

**初月の研修スケジュール**
- 1週目: 会社概要・ビジョン研修
- 2週目: コンプライアンス・セキュリティ研修
- 3週目: 部署別専門研修
- 4週目: OJT開始

※ 不明点はメンターまたは人事部にお気軽にご相談ください。";

const FALLBACK: &str = "\
ご質問ありがとうございます。

「{{ question }}」についてお調べしました。

申し訳ございませんが、現在登録されているドキュメントから該当する情報を見つけることができませんでした。

**以下をお試しください：**
- より具体的なキーワードで再度検索
- 関連する部署へ直接お問い合わせ

**よくある質問カテゴリ：**
- 休暇制度（有給、忌引、特別休暇など）
- 経費精算の申請方法
- リモートワークの申請
- セキュリティ・パスワード関連
- 入社手続き・研修

※ ドキュメントの追加をご希望の場合は、管理者にご連絡ください。";

/// Rule order matters: bereavement leave must win over the generic leave rule
/// (`忌引休暇` also contains `休暇`), and remote work over paid leave.
pub fn profile() -> DomainProfile {
    DomainProfile {
        id: DomainId::KnowledgeBase,
        title: "AI ナレッジ検索".to_string(),
        kind: DomainKind::KnowledgeBase,
        rules: vec![
            Rule::new(
                "bereavement-leave",
                ["忌引", "弔事", "葬儀", "亡くな"],
                ResponseTemplate::with_sources(
                    BEREAVEMENT_LEAVE,
                    vec![SourceRef::new(WORK_RULES, 12), SourceRef::new(WORK_RULES, 13)],
                ),
            ),
            Rule::new(
                "expense-reimbursement",
                ["経費", "精算", "立替", "領収書"],
                ResponseTemplate::with_sources(
                    EXPENSE_REIMBURSEMENT,
                    vec![
                        SourceRef::new(EXPENSE_MANUAL, 3),
                        SourceRef::new(EXPENSE_MANUAL, 5),
                    ],
                ),
            ),
            Rule::new(
                "remote-work",
                ["リモート", "テレワーク", "在宅", "自宅"],
                ResponseTemplate::with_sources(
                    REMOTE_WORK,
                    vec![SourceRef::new(WORK_RULES, 28), SourceRef::new(SYSTEM_GUIDE, 15)],
                ),
            ),
            Rule::new(
                "paid-leave",
                ["有給", "年休", "休暇", "休み"],
                ResponseTemplate::with_sources(
                    PAID_LEAVE,
                    vec![SourceRef::new(WORK_RULES, 8), SourceRef::new(WORK_RULES, 9)],
                ),
            ),
            Rule::new(
                "security",
                ["セキュリティ", "パスワード", "ログイン", "アカウント"],
                ResponseTemplate::with_sources(
                    SECURITY,
                    vec![
                        SourceRef::new(SECURITY_POLICY, 4),
                        SourceRef::new(SECURITY_POLICY, 7),
                        SourceRef::new(SYSTEM_GUIDE, 3),
                    ],
                ),
            ),
            Rule::new(
                "onboarding",
                ["入社", "オンボーディング", "新入", "研修"],
                ResponseTemplate::with_sources(
                    ONBOARDING_GUIDE,
                    vec![SourceRef::new(ONBOARDING, 2), SourceRef::new(ONBOARDING, 8)],
                ),
            ),
        ],
        fallback: Fallback::new(FALLBACK, Some(Attachment::Sources(Vec::new()))),
        suggestions: vec![
            "忌引休暇は何日取れますか？".to_string(),
            "経費精算の申請方法は？".to_string(),
            "リモートワークの申請手順".to_string(),
        ],
        documents: vec![
            DocumentEntry::new(WORK_RULES, 45, "2024/01/15"),
            DocumentEntry::new(EXPENSE_MANUAL, 12, "2024/01/20"),
            DocumentEntry::new(SYSTEM_GUIDE, 28, "2024/02/01"),
            DocumentEntry::new(SECURITY_POLICY, 18, "2024/02/10"),
            DocumentEntry::new(ONBOARDING, 35, "2024/02/15"),
        ],
    }
}
