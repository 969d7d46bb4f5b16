use crate::layout::notification_service::use_notifications;
use crate::shared::components::page_header::PageHeader;
use crate::shared::confirm::confirm;
use crate::shared::icons::icon;
use crate::system::roles::ui::details::RoleDetails;
use contracts::shared::i18n::t;
use contracts::shared::record_list::RecordList;
use contracts::system::roles::{Role, RoleId};
use contracts::system::users::{users_with_role, User};
use leptos::prelude::*;
use thaw::*;

/// Вопрос перед удалением роли; назначенные пользователи сохраняют ссылку на роль
fn delete_role_question(name: &str, assigned: usize) -> String {
    if assigned == 0 {
        format!("{} «{}»", t("confirm.delete"), name)
    } else {
        format!(
            "{} «{}» (назначена пользователям: {})",
            t("confirm.delete"),
            name,
            assigned
        )
    }
}

#[component]
#[allow(non_snake_case)]
pub fn RolesList(
    roles: RwSignal<RecordList<Role>>,
    users: RwSignal<RecordList<User>>,
) -> impl IntoView {
    let notifications = use_notifications();
    let editing = RwSignal::new(None::<Option<RoleId>>);

    let delete = move |id: RoleId, name: String| {
        let assigned = users.with_untracked(|l| users_with_role(l.iter(), id));
        if !confirm(&delete_role_question(&name, assigned)) {
            return;
        }
        if roles.try_update(|l| l.remove(id)).flatten().is_some() {
            notifications.info(t("notify.deleted"));
        }
    };

    let rows = move || {
        roles.with(|list| {
            list.iter()
                .map(|r| {
                    let id = r.id;
                    let description = r.description.clone().unwrap_or_default();
                    let name = r.name.clone();
                    let name_label = name.clone();
                    let assigned = users.with(|l| users_with_role(l.iter(), id));
                    let permissions = r
                        .permissions
                        .iter()
                        .map(|p| {
                            let label = p.label();
                            view! {
                                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                                    {label}
                                </Badge>
                            }
                        })
                        .collect_view();
                    view! {
                        <TableRow>
                            <TableCell>
                                <TableCellLayout truncate=true>
                                    <span style="font-weight: 500;">{name_label}</span>
                                </TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout truncate=true>{description}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <Flex gap=FlexGap::Small>{permissions}</Flex>
                            </TableCell>
                            <TableCell class="text-right">{assigned}</TableCell>
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
                                    on_click=move |_| delete(id, name.clone())
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
        <div class="section" id="sys_roles--list">
            <PageHeader title="Роли">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| editing.set(Some(None))
                >
                    {icon("plus")}
                    {t("action.create")}
                </Button>
            </PageHeader>

            <div class="table-wrapper">
                <Table attr:id="sys_roles" attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=140.0>"Роль"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=180.0>"Описание"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=240.0>"Права"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=110.0>"Пользователей"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=90.0></TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{rows}</TableBody>
                </Table>
            </div>

            {move || editing.get().map(|id| view! {
                <RoleDetails
                    list=roles
                    id=id
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_question_mentions_assigned_users() {
        let question = delete_role_question("Бухгалтер", 2);
        assert!(question.contains("Бухгалтер"));
        assert!(question.contains("назначена пользователям: 2"));
        assert!(!delete_role_question("Гость", 0).contains("назначена"));
    }
}
