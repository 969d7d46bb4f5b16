use crate::domain::a004_time_entry::ui::details::TimeEntryDetails;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::record_form::{confirm_and_remove, delete_record_question};
use contracts::domain::a003_project::aggregate::{Project, ProjectId};
use contracts::domain::a004_time_entry::aggregate::{TimeEntry, TimeEntryId};
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::shared::form_input::format_date;
use contracts::shared::i18n::t;
use contracts::shared::record_list::RecordList;
use leptos::prelude::*;
use rust_decimal::Decimal;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn TimeEntryList(
    entries: RwSignal<RecordList<TimeEntry>>,
    projects: RwSignal<RecordList<Project>>,
) -> impl IntoView {
    let notifications = use_notifications();
    let editing = RwSignal::new(None::<Option<TimeEntryId>>);
    let project_filter_text = RwSignal::new(String::new());
    let project_filter =
        Signal::derive(move || ProjectId::from_string(&project_filter_text.get()).ok());

    let delete = move |id: TimeEntryId| {
        let question = entries.with_untracked(|l| l.get(id).map(delete_record_question));
        if let Some(question) = question {
            confirm_and_remove(entries, id, &question, notifications);
        }
    };

    let visible_hours = move |billable_only: bool| {
        let filter = project_filter.get();
        entries.with(|l| {
            l.iter()
                .filter(|e| filter.map_or(true, |p| e.project_id == p))
                .filter(|e| !billable_only || e.billable)
                .map(|e| e.hours)
                .sum::<Decimal>()
        })
    };
    let total_hours = Signal::derive(move || visible_hours(false).to_string());
    let billable_hours = Signal::derive(move || visible_hours(true).to_string());

    let project_name = move |id: ProjectId| {
        projects.with(|l| {
            l.get(id)
                .map(|p| p.base.description.clone())
                .unwrap_or_else(|| "—".to_string())
        })
    };

    let rows = move || {
        let filter = project_filter.get();
        entries.with(|list| {
            list.iter()
                .filter(|e| filter.map_or(true, |p| e.project_id == p))
                .map(|e| {
                    let id = e.base.id;
                    let date = e.date;
                    let project_id = e.project_id;
                    let description = e.base.description.clone();
                    let hours = e.hours;
                    let billable = e.billable;
                    view! {
                        <TableRow>
                            <TableCell>
                                <TableCellLayout>{format_date(date)}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout truncate=true>{project_name(project_id)}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout truncate=true>{description}</TableCellLayout>
                            </TableCell>
                            <TableCell class="text-right">{hours.to_string()}</TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    <Badge
                                        appearance=BadgeAppearance::Tint
                                        color=if billable { BadgeColor::Success } else { BadgeColor::Subtle }
                                    >
                                        {if billable { "Оплачиваемое" } else { "Внутреннее" }}
                                    </Badge>
                                </TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| editing.set(Some(Some(id)))
                                    attr:title=t("action.edit")
                                >
                                    {icon("edit")}
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| delete(id)
                                    attr:title=t("action.delete")
                                >
                                    {icon("delete")}
                                </Button>
                            </TableCell>
                        </TableRow>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="section" id=format!("{}--list", TimeEntry::full_name())>
            <PageHeader title=TimeEntry::list_name()>
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <Select value=project_filter_text>
                        <option value="">"Все проекты"</option>
                        {move || projects.with(|l| l.iter().map(|p| view! {
                            <option value=p.base.id.as_string()>{p.base.description.clone()}</option>
                        }).collect_view())}
                    </Select>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(None))
                    >
                        {icon("plus")}
                        {t("action.create")}
                    </Button>
                </Flex>
            </PageHeader>

            <div class="stat-cards">
                <StatCard label="Всего часов" value=total_hours />
                <StatCard label="Оплачиваемых часов" value=billable_hours />
            </div>

            <div class="table-wrapper">
                <Table attr:id=TimeEntry::full_name() attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=100.0>"Дата"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=160.0>"Проект"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=220.0>"Работа"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=70.0>"Часы"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=120.0>"Тип"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{rows}</TableBody>
                </Table>
            </div>

            {move || editing.get().map(|id| view! {
                <TimeEntryDetails
                    list=entries
                    projects=projects
                    id=id
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}
        </div>
    }
}
