use contracts::shared::i18n::t;
use contracts::shared::line_totals::OrderTotals;
use contracts::shared::money::format_currency;
use leptos::prelude::*;
use thaw::*;

/// Итоги заказа: сумма, скидка, налог, всего
///
/// Получает «живые» итоги формы и показывает их округлёнными до копеек.
/// `None` (суммы не помещаются в `Decimal`) показывается прочерками.
/// Строка скидки скрыта, если `show_discount == false`.
#[component]
pub fn TotalsPanel(
    #[prop(into)] totals: Signal<Option<OrderTotals>>,
    #[prop(optional)] show_discount: bool,
) -> impl IntoView {
    let amount = move |pick: fn(&OrderTotals) -> rust_decimal::Decimal| {
        totals
            .get()
            .map(|t| format_currency(pick(&t.rounded())))
            .unwrap_or_else(|| "—".to_string())
    };

    view! {
        <Card attr:style="max-width: 360px; margin-left: auto;">
            <Flex vertical=true gap=FlexGap::Small>
                <Flex justify=FlexJustify::SpaceBetween>
                    <span>{t("totals.subtotal")}</span>
                    <span>{move || amount(|t| t.subtotal)}</span>
                </Flex>
                {show_discount.then(|| view! {
                    <Flex justify=FlexJustify::SpaceBetween>
                        <span>{t("totals.discount")}</span>
                        <span>{move || format!("−{}", amount(|t| t.discount))}</span>
                    </Flex>
                })}
                <Flex justify=FlexJustify::SpaceBetween>
                    <span>{t("totals.tax")}</span>
                    <span>{move || amount(|t| t.tax)}</span>
                </Flex>
                <Flex justify=FlexJustify::SpaceBetween style="font-weight: 600;">
                    <span>{t("totals.total")}</span>
                    <span>{move || amount(|t| t.total)}</span>
                </Flex>
                {move || totals.get().is_none().then(|| view! {
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>
                        {contracts::shared::line_totals::TOTALS_OVERFLOW}
                    </Badge>
                })}
            </Flex>
        </Card>
    }
}
