use crate::domain::a003_project::ui::details::ProjectDetails;
use crate::layout::notification_service::use_notifications;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::TableCellMoney;
use crate::shared::confirm::confirm;
use crate::shared::icons::icon;
use crate::shared::record_form::delete_record_question;
use contracts::domain::a001_account::aggregate::Account;
use contracts::domain::a003_project::aggregate::{Project, ProjectId, ProjectStatus};
use contracts::domain::a004_time_entry::aggregate::{billable_amount, project_hours, TimeEntry};
use contracts::domain::common::AggregateRoot;
use contracts::shared::i18n::t;
use contracts::shared::record_list::RecordList;
use leptos::prelude::*;
use thaw::*;

fn status_color(status: ProjectStatus) -> BadgeColor {
    match status {
        ProjectStatus::Active => BadgeColor::Success,
        ProjectStatus::OnHold => BadgeColor::Warning,
        ProjectStatus::Planning => BadgeColor::Brand,
        ProjectStatus::Completed => BadgeColor::Subtle,
    }
}

/// Проекты с часами и суммой к выставлению
#[component]
#[allow(non_snake_case)]
pub fn ProjectList(
    projects: RwSignal<RecordList<Project>>,
    accounts: RwSignal<RecordList<Account>>,
    time_entries: RwSignal<RecordList<TimeEntry>>,
) -> impl IntoView {
    let notifications = use_notifications();
    let editing = RwSignal::new(None::<Option<ProjectId>>);

    // записи времени остаются со ссылкой на удалённый проект
    let delete = move |id: ProjectId| {
        let Some(base_question) = projects.with_untracked(|l| l.get(id).map(delete_record_question)) else {
            return;
        };
        let entries = time_entries.with_untracked(|l| l.iter().filter(|e| e.project_id == id).count());
        let question = if entries > 0 {
            format!("{} (записей времени: {})", base_question, entries)
        } else {
            base_question
        };
        if !confirm(&question) {
            return;
        }
        if projects.try_update(|l| l.remove(id)).flatten().is_some() {
            notifications.info(t("notify.deleted"));
        }
    };

    let rows = move || {
        projects.with(|list| {
            list.iter()
                .map(|p| {
                    let id = p.base.id;
                    let client = p
                        .account_id
                        .and_then(|a| accounts.with(|l| l.get(a).map(|acc| acc.base.description.clone())))
                        .unwrap_or_else(|| "—".to_string());
                    let hours = time_entries.with(|l| project_hours(l.iter(), id));
                    let project = p.clone();
                    let amount = Signal::derive(move || {
                        time_entries.with(|l| Some(billable_amount(l.iter(), &project)))
                    });
                    let budget = p.budget;
                    let code = p.base.code.clone();
                    let description = p.base.description.clone();
                    let status = p.status;
                    view! {
                        <TableRow>
                            <TableCell>
                                <TableCellLayout truncate=true>{code}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout truncate=true>
                                    <span style="font-weight: 500;">{description}</span>
                                </TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout truncate=true>{client}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    <Badge appearance=BadgeAppearance::Tint color=status_color(status)>
                                        {status.label()}
                                    </Badge>
                                </TableCellLayout>
                            </TableCell>
                            <TableCell class="text-right">
                                {format!("{} / {}", hours.billable, hours.total)}
                            </TableCell>
                            <TableCellMoney value=amount />
                            <TableCellMoney value=Signal::derive(move || Some(budget)) />
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
        <div class="section" id=format!("{}--list", Project::full_name())>
            <PageHeader
                title=Project::list_name()
                subtitle=Signal::derive(move || {
                    let active = projects.with(|l| l.iter().filter(|p| p.is_active()).count());
                    format!("Активных: {}", active)
                })
            >
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| editing.set(Some(None))
                >
                    {icon("plus")}
                    {t("action.create")}
                </Button>
            </PageHeader>

            <div class="table-wrapper">
                <Table attr:id=Project::full_name() attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=90.0>"Код"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=180.0>"Наименование"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=160.0>"Заказчик"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=110.0>"Статус"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=130.0>"Часы (опл. / всего)"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=120.0>"К выставлению"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=120.0>"Бюджет"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{rows}</TableBody>
                </Table>
            </div>

            {move || editing.get().map(|id| view! {
                <ProjectDetails
                    list=projects
                    accounts=accounts
                    id=id
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}
        </div>
    }
}
