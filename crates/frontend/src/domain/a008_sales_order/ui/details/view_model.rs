use crate::layout::notification_service::NotificationService;
use crate::shared::clock::today;
use crate::shared::record_form::save_record;
use contracts::domain::a008_sales_order::aggregate::{
    SalesOrder, SalesOrderDto, SalesOrderId, SalesOrderLine,
};
use contracts::shared::form_input::format_date;
use contracts::shared::line_totals::OrderTotals;
use contracts::shared::record_list::RecordList;
use leptos::prelude::*;
use rust_decimal::Decimal;

/// Ставка налога для новой строки, %
const DEFAULT_TAX_RATE: i64 = 16;

#[derive(Clone, Copy)]
pub struct SalesOrderDetailsViewModel {
    list: RwSignal<RecordList<SalesOrder>>,
    pub id: Option<SalesOrderId>,
    pub form: RwSignal<SalesOrderDto>,
    pub error: RwSignal<Option<String>>,
}

impl SalesOrderDetailsViewModel {
    pub fn new(list: RwSignal<RecordList<SalesOrder>>, id: Option<SalesOrderId>) -> Self {
        let mut dto = list.with_untracked(|l| l.dto_for(id));
        if id.is_none() {
            dto.order_date = format_date(today());
            dto.lines.push(Self::blank_line());
        }
        Self {
            list,
            id,
            form: RwSignal::new(dto),
            error: RwSignal::new(None),
        }
    }

    fn blank_line() -> SalesOrderLine {
        SalesOrderLine {
            quantity: Decimal::ONE,
            tax_rate: Decimal::from(DEFAULT_TAX_RATE),
            ..Default::default()
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn title(&self) -> String {
        if self.is_edit_mode() {
            self.form
                .with_untracked(|f| format!("Заказ покупателя {}", f.code))
        } else {
            "Новый заказ покупателя".to_string()
        }
    }

    /// Итоги по строкам формы, пересчитываются при каждом изменении
    ///
    /// `None`, если суммы не помещаются в `Decimal`
    pub fn totals(&self) -> Option<OrderTotals> {
        self.form.with(|f| f.totals())
    }

    pub fn line_count(&self) -> usize {
        self.form.with(|f| f.lines.len())
    }

    pub fn line(&self, index: usize) -> SalesOrderLine {
        self.form
            .with(|f| f.lines.get(index).cloned().unwrap_or_default())
    }

    pub fn add_line(&self) {
        self.form.update(|f| f.lines.push(Self::blank_line()));
    }

    pub fn remove_line(&self, index: usize) {
        self.form.update(|f| {
            if index < f.lines.len() {
                f.lines.remove(index);
            }
        });
    }

    pub fn update_line(&self, index: usize, change: impl FnOnce(&mut SalesOrderLine)) {
        self.form.update(|f| {
            if let Some(line) = f.lines.get_mut(index) {
                change(line);
            }
        });
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| {
            !f.code.trim().is_empty()
                && !f.description.trim().is_empty()
                && f.customer_id.is_some()
                && !f.order_date.is_empty()
                && !f.lines.is_empty()
        })
    }

    pub fn save_command(&self, notifications: NotificationService, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        match save_record(self.list, self.id, &current, notifications) {
            Ok(_) => on_saved.run(()),
            Err(e) => self.error.set(Some(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_order_starts_with_one_line() {
        let owner = Owner::new();
        owner.set();
        let list = RwSignal::new(RecordList::<SalesOrder>::default());
        let vm = SalesOrderDetailsViewModel::new(list, None);

        assert_eq!(vm.line_count(), 1);
        assert_eq!(vm.line(0).quantity, dec!(1));
        assert_eq!(vm.line(0).tax_rate, dec!(16));
        assert!(!vm.is_form_valid());
    }

    #[test]
    fn test_line_edits_update_totals() {
        let owner = Owner::new();
        owner.set();
        let list = RwSignal::new(RecordList::<SalesOrder>::default());
        let vm = SalesOrderDetailsViewModel::new(list, None);

        vm.update_line(0, |l| {
            l.quantity = dec!(2);
            l.unit_price = dec!(10);
        });
        vm.add_line();
        vm.update_line(1, |l| {
            l.unit_price = dec!(100);
            l.tax_rate = dec!(0);
        });

        let totals = vm.totals().unwrap();
        assert_eq!(totals.subtotal, dec!(120));
        assert_eq!(totals.tax, dec!(3.2));
        assert_eq!(totals.total, dec!(123.2));

        vm.remove_line(0);
        assert_eq!(vm.line_count(), 1);
        assert_eq!(vm.totals().unwrap().total, dec!(100));

        // индекс за пределами списка игнорируется
        vm.remove_line(5);
        assert_eq!(vm.line_count(), 1);
    }

    #[test]
    fn test_discount_applies_before_tax() {
        let owner = Owner::new();
        owner.set();
        let list = RwSignal::new(RecordList::<SalesOrder>::default());
        let vm = SalesOrderDetailsViewModel::new(list, None);

        vm.update_line(0, |l| {
            l.unit_price = dec!(100);
            l.discount_percentage = dec!(10);
        });

        let totals = vm.totals().unwrap();
        assert_eq!(totals.subtotal, dec!(100));
        assert_eq!(totals.discount, dec!(10));
        assert_eq!(totals.after_discount(), dec!(90));
        assert_eq!(totals.tax, dec!(14.4));
        assert_eq!(totals.total, dec!(104.4));
    }
}
